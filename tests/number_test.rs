mod common;
use common::*;
use fconsole::lang::{ErrorCode, Status};
use fconsole::mach::{Cell, UCell};
use rand::Rng;

const OVERFLOW: Status = ErrorCode::NumberOverflow as Status;
const UNKNOWN: Status = ErrorCode::UnknownCommand as Status;

fn hex_width() -> usize {
    std::mem::size_of::<UCell>() * 2
}

#[test]
fn test_zero() {
    let mut c = console();
    assert_eq!(exec(&mut c, "0 ."), ("0 ".to_string(), 0));
    assert_eq!(exec(&mut c, "-0 ."), ("0 ".to_string(), 0));
    assert_eq!(exec(&mut c, "+0 ."), ("0 ".to_string(), 0));
    assert_eq!(exec(&mut c, "00007 ."), ("7 ".to_string(), 0));
}

#[test]
fn test_signed_limits() {
    let mut c = console();
    let s = format!("{} .", Cell::MAX);
    assert_eq!(exec(&mut c, &s), (format!("{} ", Cell::MAX), 0));
    let s = format!("{} .", Cell::MIN);
    assert_eq!(exec(&mut c, &s), (format!("{} ", Cell::MIN), 0));
    let s = format!("{}", Cell::MAX as i128 + 1);
    assert_eq!(status(&mut c, &s), OVERFLOW);
    let s = format!("{}", Cell::MIN as i128 - 1);
    assert_eq!(status(&mut c, &s), OVERFLOW);
    assert!(stack(&c).is_empty());
}

#[test]
fn test_unsigned_limits() {
    let mut c = console();
    let s = format!("+{} U.", UCell::MAX);
    assert_eq!(exec(&mut c, &s), (format!("+{} ", UCell::MAX), 0));
    let s = format!("+{}", UCell::MAX as u128 + 1);
    assert_eq!(status(&mut c, &s), OVERFLOW);
    let s = format!("+{} .", UCell::MAX);
    assert_eq!(exec(&mut c, &s), ("-1 ".to_string(), 0));
}

#[test]
fn test_hex() {
    let mut c = console();
    assert_eq!(exec(&mut c, "$ff ."), ("255 ".to_string(), 0));
    assert_eq!(exec(&mut c, "$FF ."), ("255 ".to_string(), 0));
    let s = format!("${:x} .", UCell::MAX);
    assert_eq!(exec(&mut c, &s), ("-1 ".to_string(), 0));
    let s = format!("${:x}", UCell::MAX as u128 + 1);
    assert_eq!(status(&mut c, &s), OVERFLOW);
    assert_eq!(
        exec(&mut c, "$1a $."),
        (format!("${:0w$X} ", 0x1a, w = hex_width()), 0)
    );
}

#[test]
fn test_not_numbers() {
    let mut c = console();
    assert_eq!(status(&mut c, "12a"), UNKNOWN);
    assert_eq!(status(&mut c, "$"), UNKNOWN);
    assert_eq!(status(&mut c, "$fg"), UNKNOWN);
    assert_eq!(status(&mut c, "+"), ErrorCode::StackUnderflow as Status);
    assert_eq!(status(&mut c, "1-"), UNKNOWN);
    assert!(stack(&c).is_empty());
}

#[test]
fn test_overflow_stops_line() {
    let mut c = console();
    let s = format!("1 {}0 2", UCell::MAX);
    assert_eq!(status(&mut c, &s), OVERFLOW);
    assert_eq!(stack(&c), vec![1]);
}

#[test]
#[cfg(not(any(feature = "cell32", feature = "cell64")))]
fn test_16_bit() {
    let mut c = console();
    assert_eq!(exec(&mut c, "32767 ."), ("32767 ".to_string(), 0));
    assert_eq!(c.depth(), 0);
    assert_eq!(status(&mut c, "32768"), OVERFLOW);
    assert_eq!(c.depth(), 0);
    assert_eq!(exec(&mut c, "-32768 ."), ("-32768 ".to_string(), 0));
    assert_eq!(status(&mut c, "-32769"), OVERFLOW);
    assert_eq!(exec(&mut c, "+65535 U."), ("+65535 ".to_string(), 0));
    assert_eq!(status(&mut c, "65536"), OVERFLOW);
    assert_eq!(exec(&mut c, "$7fff $."), ("$7FFF ".to_string(), 0));
    assert_eq!(status(&mut c, "$10000"), OVERFLOW);
}

#[test]
#[cfg(all(feature = "cell32", not(feature = "cell64")))]
fn test_32_bit() {
    let mut c = console();
    assert_eq!(exec(&mut c, "2147483647 ."), ("2147483647 ".to_string(), 0));
    assert_eq!(status(&mut c, "2147483648"), OVERFLOW);
    assert_eq!(exec(&mut c, "$ffff $."), ("$0000FFFF ".to_string(), 0));
}

#[test]
fn test_random_decimal() {
    let mut rng = rand::thread_rng();
    let mut c = console();
    for _ in 0..1000 {
        let v: Cell = rng.gen();
        let s = format!("{}", v);
        assert_eq!(status(&mut c, &s), 0, "{}", s);
        assert_eq!(stack(&c), vec![v], "{}", s);
        assert_eq!(exec(&mut c, "."), (format!("{} ", v), 0));
    }
}

#[test]
fn test_random_hex_and_unsigned() {
    let mut rng = rand::thread_rng();
    let mut c = console();
    for _ in 0..1000 {
        let v: UCell = rng.gen();
        let s = format!("${:x} $.", v);
        assert_eq!(exec(&mut c, &s), (format!("${:0w$X} ", v, w = hex_width()), 0));
        let s = format!("+{} U.", v);
        assert_eq!(exec(&mut c, &s), (format!("+{} ", v), 0));
    }
}
