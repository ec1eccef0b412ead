pub mod crew;
pub mod location;
pub mod notes;
pub mod records;
pub mod schedule;
pub mod sheet;
pub mod talent;

pub use crew::*;
pub use location::*;
pub use notes::*;
pub use records::{FieldRecord, MoveDirection, Record, RecordList};
pub use schedule::*;
pub use sheet::*;
pub use talent::*;
