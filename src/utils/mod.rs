// Utils compartidos

pub mod i18n;
pub mod slug;
pub mod location;

pub use i18n::*;
pub use slug::derive_user_id;
pub use location::*;
