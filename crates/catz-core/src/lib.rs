//! Core of the CatZ daily log: a record whose shape is assembled at startup
//! from plugin-contributed fields, and the JSON codec that loads and saves it.
//!
//! # Example
//! ```
//! use catz_core::codec::{load_record, save_record};
//! use catz_core::model::{FixedClock, TypeDescriptor, Value};
//! use catz_core::registry::{FieldDefault, FieldRegistry};
//!
//! let mut fields = FieldRegistry::new();
//! fields
//!     .register("energy", TypeDescriptor::Integer, FieldDefault::value(Value::Int(-1)))
//!     .unwrap();
//! let record_type = fields.build_record_type();
//!
//! let clock = FixedClock(chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
//! let record = load_record(&record_type, &serde_json::json!({"energy": 3}), &clock).unwrap();
//! assert_eq!(record.get("energy").unwrap(), &Value::Int(3));
//!
//! let json = save_record(&record).unwrap();
//! assert_eq!(json["day"], "2024-03-01");
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod storage;

pub use error::CoreError;
