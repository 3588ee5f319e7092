extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{Error, ErrorCode, Status};
use crate::mach::{Accept, Accepted, Config, Console};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main(config: Config) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(config, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(config: Config, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut console = Console::<String>::new(config, crate::DEFAULT_RECOGNIZERS, String::new());
    let mut accept = Accept::new(config);
    let interface = Interface::new("fconsole")?;
    interface.set_prompt("> ")?;
    interface.set_report_signal(Signal::Interrupt, true);

    loop {
        if interrupted.load(Ordering::SeqCst) {
            accept.clear();
            interrupted.store(false, Ordering::SeqCst);
        };
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                accept.clear();
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        for c in string.bytes().chain(std::iter::once(config.get_newline())) {
            let status = match accept.accept(c) {
                Ok(Accepted::Done) => {
                    let text = accept.line().to_vec();
                    let result = console.process(accept.line_mut());
                    let out = std::mem::take(console.output_mut());
                    if !out.is_empty() {
                        interface.write_fmt(format_args!("{}\n", out))?;
                    }
                    match result {
                        Ok(()) => 0,
                        Err(error) => {
                            report(&interface, &error, &text)?;
                            error.code()
                        }
                    }
                }
                Ok(_) => 0,
                Err(error) => {
                    report(&interface, &error, &[])?;
                    error.code()
                }
            };
            if status == ErrorCode::User as Status {
                interface.write_fmt(format_args!("Bye...\n"))?;
                return Ok(());
            }
        }
        interface.add_history_unique(string);
    }
    Ok(())
}

fn report<T: linefeed::Terminal>(
    interface: &Interface<T>,
    error: &Error,
    line: &[u8],
) -> std::io::Result<()> {
    if error.code() == ErrorCode::User as Status {
        return Ok(());
    }
    let message = match line.get(error.column()) {
        Some(word) if !word.is_empty() => format!(
            "Error in command `{}': {}",
            String::from_utf8_lossy(word),
            Error::from_code(error.code())
        ),
        _ => format!("Error: {}", Error::from_code(error.code())),
    };
    interface.write_fmt(format_args!("{}\n", Style::new().bold().paint(message)))
}
