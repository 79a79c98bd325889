use serde::{Deserialize, Serialize};

/// Identity block of the site owner, embedded directly in the document.
///
/// `avatar` holds a self-contained `data:image/jpeg;base64,...` string so
/// the document stays a single portable blob.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub avatar: String,
    pub name: String,
    pub bio: String,
    pub email: String,
}

impl Profile {
    /// First and remaining name parts, as split for the hero heading.
    pub fn name_parts(&self) -> (&str, String) {
        let mut parts = self.name.split_whitespace();
        let first = parts.next().unwrap_or("");
        let rest = parts.collect::<Vec<_>>().join(" ");
        (first, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_splits_into_first_and_rest() {
        let profile = Profile {
            avatar: String::new(),
            name: "Cecilia van Dongen".to_string(),
            bio: String::new(),
            email: String::new(),
        };
        let (first, rest) = profile.name_parts();
        assert_eq!(first, "Cecilia");
        assert_eq!(rest, "van Dongen");
    }

    #[test]
    fn single_word_name_has_empty_rest() {
        let profile = Profile {
            avatar: String::new(),
            name: "Cecilia".to_string(),
            bio: String::new(),
            email: String::new(),
        };
        let (first, rest) = profile.name_parts();
        assert_eq!(first, "Cecilia");
        assert!(rest.is_empty());
    }
}
