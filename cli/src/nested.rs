//! Schema-less parsing demo.
//!
//! Try `nested-cli --entity.age 23 --entity.name Joe --foo bar --blah true extra`.

mod output;

use argtree_core::{Accessor, Context};
use tracing::debug;

use crate::output::{init_tracing, or_exit, pretty};

fn main() {
    init_tracing();

    let ctx = or_exit(Context::parse_env());
    debug!(params = ctx.params().len(), keys = ctx.options().len(), "Parsed arguments");
    println!("params: {}", pretty(ctx.params()));
    println!("options: {}", pretty(ctx.options()));

    println!("age: {}", or_exit(ctx.get_int("entity.age", 100)));
    println!("name: {}", or_exit(ctx.get_string("entity.name", "anonymous")));
    println!("blah: {}", or_exit(ctx.get_bool("blah", false)));
    println!("foo: {}", or_exit(ctx.get_string("foo", "")));

    let entity = or_exit(ctx.get_object("entity"));
    println!("entity: {}", pretty(&entity));
}
