//! User profile record shown on the profile page.

/// Account details rendered by the profile form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub bio: &'static str,
    pub company: &'static str,
    pub role: &'static str,
}

impl UserProfile {
    /// Initials used as the avatar fallback, e.g. "Shad CN" -> "SC".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let profile = UserProfile {
            name: "Shad CN",
            email: "",
            bio: "",
            company: "",
            role: "",
        };
        assert_eq!(profile.initials(), "SC");
    }

    #[test]
    fn test_initials_single_word() {
        let profile = UserProfile {
            name: "Cher",
            email: "",
            bio: "",
            company: "",
            role: "",
        };
        assert_eq!(profile.initials(), "C");
    }

    #[test]
    fn test_initials_empty_name() {
        let profile = UserProfile {
            name: "",
            email: "",
            bio: "",
            company: "",
            role: "",
        };
        assert_eq!(profile.initials(), "");
    }
}
