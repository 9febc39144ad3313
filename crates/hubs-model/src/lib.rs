pub mod diagram;
pub mod error;
pub mod field;
pub mod snapshot;

pub use diagram::{CanvasSize, ColorTag, DiagramPrimitive, Point, PrimitiveKind, PrimitiveRole};
pub use error::{HubsError, Result};
pub use field::{CalculatorConfig, FieldSpec, InputField};
pub use snapshot::StateSnapshot;
