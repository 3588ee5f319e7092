//! # FConsole
//!
//! An interactive FORTH-like command console.
//!

use argh::FromArgs;
use fconsole::mach::Config;

#[derive(FromArgs)]
/// Interactive command console. Type words separated by spaces; `EXIT` quits.
struct Args {
    #[argh(option, default = "8")]
    /// data stack size in cells, up to 32
    stack_size: usize,

    #[argh(option, default = "40")]
    /// input line size in bytes, up to 255
    buffer_size: usize,
}

fn main() {
    let args: Args = argh::from_env();
    let config = Config::default()
        .stack_size(args.stack_size)
        .input_buffer_size(args.buffer_size)
        .newline(b'\n');
    fconsole::term::main(config);
}
