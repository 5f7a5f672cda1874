use fixedarray::FixedCharBuffer;
use matches::assert_matches;

use std::fmt::{self, Write};

#[test]
fn test_new_is_zeroed() {
    let buf = FixedCharBuffer::<16>::new();
    assert!(buf.iter().all(|&b| b == 0));
    assert_eq!(buf.get_string(), "");
    assert_eq!(buf.string_len(), 0);
    assert_eq!(buf.len(), 16);
    assert_eq!(buf.max_size(), 16);
    assert!(!buf.is_empty());
    assert_eq!(buf, FixedCharBuffer::default());
}

#[test]
fn test_format_string() {
    let mut buf = FixedCharBuffer::<32>::new();
    assert_eq!(buf.format_string(format_args!("hello")), "hello");
    assert_eq!(buf.get_string(), "hello");
    assert_eq!(buf[31], 0);

    let name = "world";
    buf.format_string(format_args!("{} {:>4}|{:.2}", name, 7, 1.0 / 3.0));
    assert_eq!(buf.get_string(), "world    7|0.33");
}

#[test]
fn test_format_string_overwrites() {
    let mut buf = FixedCharBuffer::<8>::from_str_truncate("abcdef");
    buf.format_string(format_args!("xy"));
    assert_eq!(buf.get_string(), "xy");
}

#[test]
fn test_format_string_truncates() {
    let mut buf = FixedCharBuffer::<5>::new();
    let s = buf.format_string(format_args!("abcdef"));
    assert!(s.len() <= 4);
    assert_eq!(s, "abcd");
    assert_eq!(buf[4], 0);
}

#[test]
fn test_format_string_truncates_between_characters() {
    let mut buf = FixedCharBuffer::<5>::new();
    buf.format_string(format_args!("{}", "ab€€"));
    assert_eq!(buf.get_string(), "ab");
    assert_eq!(buf.string_len(), 2);
}

#[test]
fn test_format_string_into_single_byte() {
    let mut buf = FixedCharBuffer::<1>::new();
    assert_eq!(buf.format_string(format_args!("anything")), "");
    assert_eq!(buf.append_string("more"), "");
    assert_eq!(buf[0], 0);
}

struct Failing;

impl fmt::Display for Failing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("par")?;
        Err(fmt::Error)
    }
}

#[test]
fn test_formatting_error_is_swallowed() {
    let mut buf = FixedCharBuffer::<16>::new();
    assert_eq!(buf.format_string(format_args!("{}{}", Failing, "tial")), "par");
    assert_eq!(buf[15], 0);

    buf.append_format_string(format_args!("-{}", Failing));
    assert_eq!(buf.get_string(), "par-par");
}

#[test]
fn test_append_accumulates() {
    let mut buf = FixedCharBuffer::<8>::new();
    buf.append_string("ab");
    buf.append_string("cd");
    assert_eq!(buf.get_string(), "abcd");
    buf.append_format_string(format_args!("{}", 12));
    assert_eq!(buf.get_string(), "abcd12");
    assert_eq!(buf.string_len(), 6);
}

#[test]
fn test_append_truncates_at_capacity() {
    let mut buf = FixedCharBuffer::<6>::new();
    buf.append_string("abc");
    assert_eq!(buf.append_string("defgh"), "abcde");
    assert_eq!(buf[5], 0);
}

#[test]
fn test_append_when_full() {
    let mut buf = FixedCharBuffer::<5>::from_str_truncate("abcd");
    assert_eq!(buf.string_len(), 4);
    let before = buf;
    assert_eq!(buf.append_string("x"), "abcd");
    assert_eq!(buf.append_format_string(format_args!("{}", 1)), "abcd");
    assert_eq!(buf, before);
}

#[test]
fn test_append_without_terminator_counts_as_full() {
    let mut buf = FixedCharBuffer::from(*b"abcd");
    assert_eq!(buf.string_len(), 4);
    assert_eq!(buf.append_string("zz"), "abc");
    assert_eq!(buf.as_bytes(), b"abc\0");
}

#[test]
fn test_append_after_raw_terminator() {
    let mut buf = FixedCharBuffer::from(*b"ab\0xyz\0\0");
    assert_eq!(buf.append_string("c"), "abc");
    assert_eq!(buf.as_bytes(), b"abc\0yz\0\0");
}

#[test]
fn test_terminate() {
    let mut buf = FixedCharBuffer::<4>::new();
    buf.fill(b'q');
    assert_eq!(buf.get_string(), "");
    assert_eq!(buf.terminate(), "qqq");
}

#[test]
fn test_get_string_on_corrupted_buffer() {
    let mut buf = FixedCharBuffer::<8>::from_str_truncate("hi");
    buf[7] = b'!';
    assert_eq!(buf.get_string(), "");
    assert_eq!(buf.get_bytes(), b"");
    assert_eq!(buf.to_c_str(), None);
    assert_eq!(buf.to_string(), "");
}

#[test]
fn test_get_string_cuts_invalid_utf8() {
    let mut buf = FixedCharBuffer::<8>::from_str_truncate("ok");
    buf[2] = 0xff;
    buf[3] = b'!';
    assert_eq!(buf.get_bytes(), b"ok\xff!");
    assert_eq!(buf.get_string(), "ok");
}

#[test]
fn test_to_c_str() {
    let buf = FixedCharBuffer::<8>::from_str_truncate("abc");
    let c_str = buf.to_c_str().unwrap();
    assert_eq!(c_str.to_bytes(), b"abc");
    assert_eq!(c_str.to_str(), Ok("abc"));
}

#[test]
fn test_indexed_access() {
    let mut buf = FixedCharBuffer::<4>::new();
    buf[0] = b'h';
    *buf.at_mut(1).unwrap() = b'i';
    assert_eq!(buf.at(0), Ok(&b'h'));
    assert_eq!(buf.get_string(), "hi");
    assert_eq!(*buf.front(), b'h');
    assert_eq!(*buf.back(), 0);

    let err = buf.at(4).unwrap_err();
    assert_eq!((err.index(), err.bound()), (4, 4));
    assert_matches!(buf.at_mut(10), Err(_));
}

#[test]
#[should_panic(expected = "index 4 out of range for length 4")]
fn test_index_oob() {
    let buf = FixedCharBuffer::<4>::new();
    let _ = buf[4];
}

#[test]
fn test_fill_assign_clear() {
    let mut buf = FixedCharBuffer::<4>::new();
    buf.fill(b'a');
    assert_eq!(buf.as_bytes(), b"aaaa");
    buf.assign(b'b');
    assert_eq!(buf.as_bytes(), b"bbbb");
    buf.clear();
    assert_eq!(buf.as_bytes(), b"\0\0\0\0");
}

#[test]
fn test_swap() {
    let mut a = FixedCharBuffer::<8>::from_str_truncate("left");
    let mut b = FixedCharBuffer::<8>::from_str_truncate("right");
    a.swap(&mut b);
    assert_eq!(a.get_string(), "right");
    assert_eq!(b.get_string(), "left");
}

#[test]
fn test_comparisons_use_all_bytes() {
    let a = FixedCharBuffer::<4>::from_str_truncate("ab");
    let b = FixedCharBuffer::<4>::from_str_truncate("ac");
    assert!(a < b);
    assert_ne!(a, b);
    assert_eq!(a, FixedCharBuffer::from(*b"ab\0\0"));

    let fresh = FixedCharBuffer::<5>::from_str_truncate("ab");
    let stale = FixedCharBuffer::from(*b"ab\0z\0");
    assert_eq!(stale.get_string(), fresh.get_string());
    assert_ne!(stale, fresh);
}

#[test]
fn test_write_macro_appends() {
    let mut buf = FixedCharBuffer::<10>::new();
    write!(buf, "{}:", "key").unwrap();
    write!(buf, "{}", 1234567).unwrap();
    assert_eq!(buf.get_string(), "key:12345");
}

#[test]
fn test_display_and_debug() {
    let buf = FixedCharBuffer::<8>::from_str_truncate("a\"b");
    assert_eq!(format!("{}", buf), "a\"b");
    assert_eq!(format!("{:?}", buf), "\"a\\\"b\"");
}

#[test]
fn test_as_array_round_trip() {
    let buf = FixedCharBuffer::<4>::from_str_truncate("xyz");
    assert_eq!(buf.as_array(), &[b'x', b'y', b'z', 0]);
    let inner = buf.into_inner();
    assert_eq!(FixedCharBuffer::from(inner), buf);
}
