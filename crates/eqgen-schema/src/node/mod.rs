mod class;
mod member;

pub use self::class::*;
pub use self::member::*;
