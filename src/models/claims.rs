//! JWT Claims model.

use serde::{Deserialize, Serialize};

/// JWT Claims structure carried in the session cookie
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub email: String,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at timestamp
}

impl Claims {
    /// Check if the claims identify the given resource owner.
    pub fn matches_owner(&self, email: &str) -> bool {
        self.email == email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_owner() {
        let claims = Claims {
            email: "owner@example.com".to_string(),
            exp: 2,
            iat: 1,
        };
        assert!(claims.matches_owner("owner@example.com"));
        assert!(!claims.matches_owner("other@example.com"));
        // Identity comparison is exact, never case-folded
        assert!(!claims.matches_owner("Owner@example.com"));
    }
}
