pub mod coords;
pub mod form;
pub mod id;
pub mod kind;
pub mod workout;

pub use coords::Coords;
pub use form::WorkoutForm;
pub use id::IdGenerator;
pub use kind::WorkoutKind;
pub use workout::{Workout, WorkoutDetails};
