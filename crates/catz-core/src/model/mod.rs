pub mod field;
pub mod record;
pub mod types;
pub mod value;

pub use field::{DefaultFactory, FieldDefault, FieldDescriptor};
pub use record::{Clock, FixedClock, Record, RecordType, SystemClock, DAY_FIELD};
pub use types::{EnumDescriptor, EnumMember, TypeDescriptor};
pub use value::Value;
