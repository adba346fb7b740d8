use super::issue::{Issue, Priority, UNDEFINED};
use uuid::Uuid;

/// Configures and creates [`Issue`] instances. All fields that have not been
/// set are replaced by their defaults when [`build`](IssueBuilder::build)
/// runs, and out-of-range coordinates are clamped rather than rejected.
///
/// The builder keeps its settings across `build` calls, so a parser can stamp
/// the shared fields once and only vary location and message per match:
///
/// ```ignore
/// let mut builder = IssueBuilder::new();
/// builder.kind("javac").category("Deprecation");
/// for m in matches {
///     issues.add(builder.file_name(m.file).line_start(m.line).message(m.text).build());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct IssueBuilder {
    file_name: Option<String>,
    line_start: i64,
    line_end: i64,
    column_start: i64,
    column_end: i64,
    category: Option<String>,
    kind: Option<String>,
    package_name: Option<String>,
    priority: Option<Priority>,
    message: Option<String>,
    description: Option<String>,
    fingerprint: Option<String>,
}

impl IssueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_name(&mut self, file_name: impl Into<String>) -> &mut Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn line_start(&mut self, line_start: i64) -> &mut Self {
        self.line_start = line_start;
        self
    }

    pub fn line_end(&mut self, line_end: i64) -> &mut Self {
        self.line_end = line_end;
        self
    }

    pub fn column_start(&mut self, column_start: i64) -> &mut Self {
        self.column_start = column_start;
        self
    }

    pub fn column_end(&mut self, column_end: i64) -> &mut Self {
        self.column_end = column_end;
        self
    }

    pub fn category(&mut self, category: impl Into<String>) -> &mut Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(&mut self, kind: impl Into<String>) -> &mut Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn package_name(&mut self, package_name: impl Into<String>) -> &mut Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn priority(&mut self, priority: Priority) -> &mut Self {
        self.priority = Some(priority);
        self
    }

    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn fingerprint(&mut self, fingerprint: impl Into<String>) -> &mut Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    /// Seeds every field from an existing issue. The identifier is not
    /// copied; the next `build` generates a fresh one.
    pub fn copy_issue(&mut self, copy: &Issue) -> &mut Self {
        self.file_name = Some(copy.file_name().to_string());
        self.line_start = i64::from(copy.line_start());
        self.line_end = i64::from(copy.line_end());
        self.column_start = i64::from(copy.column_start());
        self.column_end = i64::from(copy.column_end());
        self.category = Some(copy.category().to_string());
        self.kind = Some(copy.kind().to_string());
        self.package_name = Some(copy.package_name().to_string());
        self.priority = Some(copy.priority());
        self.message = Some(copy.message().to_string());
        self.description = Some(copy.description().to_string());
        self.fingerprint = Some(copy.fingerprint().to_string());
        self
    }

    /// Creates a new issue from the current settings, applying every
    /// normalization rule in one place. Never fails.
    pub fn build(&self) -> Issue {
        let (line_start, line_end) = normalize_range(self.line_start, self.line_end);
        let (column_start, column_end) = normalize_range(self.column_start, self.column_end);

        Issue {
            id: Uuid::new_v4(),
            file_name: normalize_file_name(self.file_name.as_deref()),
            line_start,
            line_end,
            column_start,
            column_end,
            category: strip_to_empty(self.category.as_deref()),
            kind: default_string(self.kind.as_deref()),
            package_name: default_string(self.package_name.as_deref()),
            priority: self.priority.unwrap_or_default(),
            message: strip_to_empty(self.message.as_deref()),
            description: strip_to_empty(self.description.as_deref()),
            fingerprint: default_string(self.fingerprint.as_deref()),
        }
    }
}

/// Clamps negative coordinates to 0 and makes the range well-formed: a zero
/// end with a non-zero start snaps to the start, a zero start adopts the end,
/// and a reversed pair is swapped.
fn normalize_range(start: i64, end: i64) -> (u32, u32) {
    let start = start.clamp(0, i64::from(u32::MAX)) as u32;
    let end = end.clamp(0, i64::from(u32::MAX)) as u32;

    let end = if end == 0 { start } else { end };
    if start == 0 {
        (end, end)
    } else {
        (start.min(end), start.max(end))
    }
}

fn normalize_file_name(file_name: Option<&str>) -> String {
    match file_name.map(str::trim) {
        Some(name) if !name.is_empty() => name.replace('\\', "/"),
        _ => UNDEFINED.to_string(),
    }
}

fn default_string(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => UNDEFINED.to_string(),
    }
}

fn strip_to_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_get_defaults() {
        let issue = IssueBuilder::new().build();

        assert_eq!(issue.file_name(), "-");
        assert_eq!(issue.kind(), "-");
        assert_eq!(issue.package_name(), "-");
        assert_eq!(issue.fingerprint(), "-");
        assert_eq!(issue.category(), "");
        assert_eq!(issue.message(), "");
        assert_eq!(issue.description(), "");
        assert_eq!(issue.priority(), Priority::Normal);
        assert_eq!(issue.line_start(), 0);
        assert_eq!(issue.line_end(), 0);
        assert_eq!(issue.column_start(), 0);
        assert_eq!(issue.column_end(), 0);
    }

    #[test]
    fn negative_coordinates_clamp_to_zero() {
        let issue = IssueBuilder::new()
            .line_start(-5)
            .line_end(-1)
            .column_start(-3)
            .column_end(-7)
            .build();

        assert_eq!(issue.line_start(), 0);
        assert_eq!(issue.line_end(), 0);
        assert_eq!(issue.column_start(), 0);
        assert_eq!(issue.column_end(), 0);
    }

    #[test]
    fn zero_end_snaps_to_start() {
        let issue = IssueBuilder::new().line_start(42).column_start(5).build();

        assert_eq!(issue.line_start(), 42);
        assert_eq!(issue.line_end(), 42);
        assert_eq!(issue.column_start(), 5);
        assert_eq!(issue.column_end(), 5);
    }

    #[test]
    fn zero_start_adopts_end() {
        let issue = IssueBuilder::new().line_end(17).build();

        assert_eq!(issue.line_start(), 17);
        assert_eq!(issue.line_end(), 17);
    }

    #[test]
    fn reversed_range_is_swapped() {
        let issue = IssueBuilder::new().line_start(9).line_end(3).build();

        assert_eq!(issue.line_start(), 3);
        assert_eq!(issue.line_end(), 9);
    }

    #[test]
    fn backslashes_normalize_to_forward_slashes() {
        let issue = IssueBuilder::new()
            .file_name("C:\\work\\project\\Main.java")
            .build();

        assert_eq!(issue.file_name(), "C:/work/project/Main.java");
    }

    #[test]
    fn file_name_is_stripped_and_defaulted() {
        assert_eq!(IssueBuilder::new().file_name("  a.c  ").build().file_name(), "a.c");
        assert_eq!(IssueBuilder::new().file_name("   ").build().file_name(), "-");
    }

    #[test]
    fn message_and_description_are_stripped() {
        let issue = IssueBuilder::new()
            .message("  trailing spaces  ")
            .description("\tindented\n")
            .build();

        assert_eq!(issue.message(), "trailing spaces");
        assert_eq!(issue.description(), "indented");
    }

    #[test]
    fn package_name_defaults_to_the_sentinel() {
        let unset = IssueBuilder::new().build();
        assert!(!unset.has_package_name());

        let set = IssueBuilder::new().package_name("hudson.remoting").build();
        assert!(set.has_package_name());
        assert_eq!(set.package_name(), "hudson.remoting");
    }

    #[test]
    fn copy_matches_original_except_id() {
        let mut builder = IssueBuilder::new();
        let original = builder
            .file_name("src/main.rs")
            .line_start(12)
            .line_end(14)
            .column_start(8)
            .column_end(20)
            .category("Deprecation")
            .kind("javac")
            .package_name("hudson.remoting")
            .priority(Priority::High)
            .message("deprecated API")
            .description("details")
            .build();

        let copied = IssueBuilder::new().copy_issue(&original).build();

        assert_eq!(copied, original);
        assert_ne!(copied.id(), original.id());
    }

    #[test]
    fn builder_is_reusable_between_builds() {
        let mut builder = IssueBuilder::new();
        builder.kind("javac").category("Deprecation");

        let first = builder.file_name("A.java").line_start(1).build();
        let second = builder.file_name("B.java").line_start(2).build();

        assert_eq!(first.category(), "Deprecation");
        assert_eq!(second.category(), "Deprecation");
        assert_eq!(second.kind(), "javac");
        assert_eq!(first.file_name(), "A.java");
        assert_eq!(second.file_name(), "B.java");
        assert_ne!(first, second);
    }
}
