//! Command-line argument parsing into flat or nested typed values.
//!
//! Two modes share one scanner and one value model:
//!
//! - **Declarative** — register typed options on a [`Command`], then
//!   [`Command::parse`] yields [`Matches`]: positional parameters plus every
//!   option's resolved value, seeded from defaults.
//!   [`Matches::apply`] copies bound values into a caller [`Destination`].
//! - **Schema-less** — [`Context::parse`] turns `--dotted.path value` pairs
//!   into a nested [`Object`], coercing each value with [`Value::coerce`].
//!
//! Both results implement [`Accessor`] for typed lookups with defaults.
//!
//! Flags are `--name` followed by their value as the next token. Boolean
//! options may stand alone. There is no `--name=value` syntax and no
//! combined short flags.
//!
//! Parsing never exits the process; failures come back as [`Error`].
//! Binaries that want the classic `*** message` diagnostic and exit status 1
//! call [`Error::exit`].
//!
//! # Example
//!
//! ```
//! use argtree_core::*;
//!
//! let mut cmd = Command::new("demo", "A demo program.");
//! cmd.string_option(None, "name", "anonymous", "Who to greet")
//!     .int_option(None, "count", 1, "How many times")
//!     .bool_option(None, "loud", false, "Shout");
//!
//! let matches = cmd.parse(["--count", "3", "--loud", "extra"]).unwrap();
//! assert_eq!(matches.params(), ["extra"]);
//! assert_eq!(matches.get_string("name", "").unwrap(), "anonymous");
//! assert_eq!(matches.get_int("count", 0).unwrap(), 3);
//! assert!(matches.get_bool("loud", false).unwrap());
//!
//! let ctx = Context::parse(["--entity.name", "Joe", "--entity.age", "23"]).unwrap();
//! assert_eq!(ctx.get_int("entity.age", 0).unwrap(), 23);
//!
//! let err = cmd.parse(["--nope", "1"]).unwrap_err();
//! assert_eq!(err.to_string(), "Unknown option: --nope");
//! ```

mod access;
mod bind;
mod command;
mod config;
mod context;
mod error;
mod matches;
mod scan;
pub mod tree;
mod validate;
mod value;

pub use access::Accessor;
pub use bind::{Destination, Target};
pub use command::{Command, OptionSpec};
pub use config::CommandConfig;
pub use context::Context;
pub use error::{Error, Result};
pub use matches::Matches;
pub use validate::{ValidationError, validate_command};
pub use value::{Object, Value, ValueType, parse_bool_literal};
