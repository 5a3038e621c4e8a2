mod borrowing_sub;
mod carrying_add;
mod carrying_mul;

pub use borrowing_sub::BorrowingSub;
pub use carrying_add::CarryingAdd;
pub use carrying_mul::CarryingMul;
