pub mod birthday;
pub mod directory;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use directory::{Directory, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use name::Name;
pub use phone::{Phone, PHONE_DIGITS};
pub use record::Record;
