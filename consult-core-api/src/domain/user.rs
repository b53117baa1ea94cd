use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "c-level")]
    CLevel,
    #[serde(rename = "director")]
    Director,
    #[serde(rename = "staff")]
    Staff,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::CLevel => "C레벨",
            UserRole::Director => "부서장",
            UserRole::Staff => "담당자",
        }
    }

    /// Role-based access table.
    pub fn permits(&self, section: Section, action: Action) -> bool {
        match (self, section, action) {
            (UserRole::CLevel, _, _) => true,
            (UserRole::Director, Section::Settlement | Section::Admin, Action::Write) => false,
            (UserRole::Director, _, _) => true,
            (UserRole::Staff, Section::Consultation | Section::Contract, _) => true,
            (UserRole::Staff, Section::Settlement | Section::Admin, _) => false,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::CLevel => write!(f, "c-level"),
            UserRole::Director => write!(f, "director"),
            UserRole::Staff => write!(f, "staff"),
        }
    }
}

/// Area of the application guarded by role permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Consultation,
    Contract,
    Settlement,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Write,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: UserRole,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, role: UserRole) -> Self {
        Self { id, name: name.into(), role }
    }
}

/// Built-in user directory.
pub fn default_users() -> Vec<User> {
    vec![
        User::new(1, "대표", UserRole::CLevel),
        User::new(2, "정상문", UserRole::Director),
        User::new(3, "신입직원", UserRole::Staff),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_level_has_full_access() {
        for section in [Section::Consultation, Section::Contract, Section::Settlement, Section::Admin] {
            assert!(UserRole::CLevel.permits(section, Action::Read));
            assert!(UserRole::CLevel.permits(section, Action::Write));
        }
    }

    #[test]
    fn test_director_reads_settlement_but_cannot_write() {
        assert!(UserRole::Director.permits(Section::Settlement, Action::Read));
        assert!(!UserRole::Director.permits(Section::Settlement, Action::Write));
        assert!(UserRole::Director.permits(Section::Admin, Action::Read));
        assert!(!UserRole::Director.permits(Section::Admin, Action::Write));
        assert!(UserRole::Director.permits(Section::Consultation, Action::Write));
    }

    #[test]
    fn test_staff_limited_to_consultations_and_contracts() {
        assert!(UserRole::Staff.permits(Section::Consultation, Action::Write));
        assert!(UserRole::Staff.permits(Section::Contract, Action::Write));
        assert!(!UserRole::Staff.permits(Section::Settlement, Action::Read));
        assert!(!UserRole::Staff.permits(Section::Admin, Action::Read));
    }

    #[test]
    fn test_role_serializes_with_wire_names() {
        assert_eq!(serde_json::to_string(&UserRole::CLevel).unwrap(), "\"c-level\"");
        assert_eq!(UserRole::Director.to_string(), "director");
        assert_eq!(UserRole::Staff.label(), "담당자");
    }

    #[test]
    fn test_default_directory() {
        let users = default_users();
        assert_eq!(users.len(), 3);
        assert_eq!(users[1].name, "정상문");
        assert_eq!(users[1].role, UserRole::Director);
    }
}
