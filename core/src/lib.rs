// veldgen holds the sampling, smoothing and rendering algorithms
pub mod columns;
pub mod field;
pub mod heights;
pub mod params;
pub mod smooth;

pub use columns::{gen_column, write_columns};
pub use field::{render_rows, write_field};
pub use heights::gen_heights;
pub use params::FieldParams;
pub use smooth::smooth;
