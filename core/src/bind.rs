//! Copying resolved option values into caller-owned structures.
//!
//! An option declared with [`bound_to`](crate::OptionSpec::bound_to) names a
//! destination field. After parsing, [`Matches::apply`](crate::Matches::apply)
//! asks a [`Destination`] for that field and writes the value into it.

/// A mutable field a resolved value can be written into.
#[derive(Debug)]
pub enum Target<'a> {
    /// String field.
    String(&'a mut String),
    /// Integer field.
    Int(&'a mut i64),
    /// Boolean field.
    Bool(&'a mut bool),
}

/// A caller structure whose fields receive option values.
///
/// # Examples
///
/// ```
/// use argtree_core::{Command, Destination, Target};
///
/// #[derive(Default)]
/// struct Settings {
///     name: String,
///     verbose: bool,
/// }
///
/// impl Destination for Settings {
///     fn target(&mut self, field: &str) -> Option<Target<'_>> {
///         match field {
///             "name" => Some(Target::String(&mut self.name)),
///             "verbose" => Some(Target::Bool(&mut self.verbose)),
///             _ => None,
///         }
///     }
/// }
///
/// let mut cmd = Command::new("demo", "");
/// cmd.string_option(Some("name"), "name", "anonymous", "")
///     .bool_option(Some("verbose"), "verbose", false, "");
///
/// let mut settings = Settings::default();
/// cmd.parse(["--verbose"]).unwrap().apply(&cmd, &mut settings);
/// assert_eq!(settings.name, "anonymous");
/// assert!(settings.verbose);
/// ```
pub trait Destination {
    /// Returns the field called `field`, or `None` if there is no such field.
    fn target(&mut self, field: &str) -> Option<Target<'_>>;
}
