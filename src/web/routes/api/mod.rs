pub mod docs;
pub mod explore;
pub mod subscribe;

pub use docs::docs;
pub use explore::explore;
pub use subscribe::subscribe;
