//! Simple inspector for TypeID strings.
//!
//! Parses each argument as a TypeID and prints its components, or
//! generates a fresh one when called without arguments.

use typeid::TypeId;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        let id = TypeId::generate("demo").expect("static prefix is valid");
        println!("Generated: {}", id);
        println!("  prefix: {:?}", id.prefix());
        println!("  uuid:   {}", id.uuid());
        return;
    }

    for arg in &args {
        match TypeId::parse(arg) {
            Ok(id) => {
                println!("{}", arg);
                println!("  prefix: {:?}", id.prefix());
                println!("  suffix: {}", id.suffix());
                println!("  uuid:   {}", id.uuid());
            }
            Err(err) => {
                println!("{}", arg);
                println!("  invalid: {}", err);
            }
        }
    }
}
