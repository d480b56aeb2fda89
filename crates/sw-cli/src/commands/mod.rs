pub mod categories;
pub mod category;
pub mod dispatch;
pub mod probe;
pub mod serve;
pub mod urgent;
