use serde::{Deserialize, Serialize};

/// A shelter dog.
///
/// Identity is the `(name, breed)` pair. Age and photograph are payload:
/// two dogs with the same name and breed are the same dog even if the
/// rest differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dog {
    pub name: String,
    pub breed: String,

    /// Age in years. Signed so that bad input can reach the validator.
    pub age: i32,

    /// Photograph reference, usually a URL
    pub photograph: String,
}

impl Dog {
    pub fn new(
        name: impl Into<String>,
        breed: impl Into<String>,
        age: i32,
        photograph: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
            age,
            photograph: photograph.into(),
        }
    }

    /// True when this dog has the given identity
    pub fn is(&self, name: &str, breed: &str) -> bool {
        self.name == name && self.breed == breed
    }

    pub fn same_identity(&self, other: &Dog) -> bool {
        self.is(&other.name, &other.breed)
    }

    /// Full field comparison, payload included
    pub fn same_record(&self, other: &Dog) -> bool {
        self.same_identity(other) && self.age == other.age && self.photograph == other.photograph
    }
}

impl PartialEq for Dog {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Dog {}

impl std::hash::Hash for Dog {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.breed.hash(state);
    }
}

impl std::fmt::Display for Dog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}), {} years", self.name, self.breed, self.age)
    }
}
