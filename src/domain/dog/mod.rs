pub mod entity;
pub mod invariants;

pub use entity::Dog;
pub use invariants::{validate_dog, DefaultDogValidator, DogValidator};
