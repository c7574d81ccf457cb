pub mod choice;
pub use choice::*;

pub mod error;
pub use error::*;

pub mod outcome;
pub use outcome::*;

pub mod player;
pub use player::*;

pub mod round;
pub use round::*;

pub mod session;
pub use session::*;
