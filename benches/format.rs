
extern crate fixedarray;
#[macro_use] extern crate bencher;

use fixedarray::FixedCharBuffer;

use bencher::Bencher;
use bencher::black_box;

fn format_string(b: &mut Bencher) {
    let mut buf = FixedCharBuffer::<64>::new();
    b.iter(|| {
        buf.format_string(format_args!("{}:{}", black_box("frame"), black_box(1024))).len()
    });
    b.bytes = buf.string_len() as u64;
}

fn append_until_full(b: &mut Bencher) {
    let mut buf = FixedCharBuffer::<512>::new();
    b.iter(|| {
        buf.clear();
        while buf.string_len() < buf.len() - 1 {
            buf.append_string(black_box("abc"));
        }
        buf[0]
    });
    b.bytes = buf.len() as u64;
}

fn format_truncated(b: &mut Bencher) {
    let mut buf = FixedCharBuffer::<16>::new();
    let long = "x".repeat(1024);
    b.iter(|| {
        buf.format_string(format_args!("{}", black_box(&long))).len()
    });
    b.bytes = 16;
}

benchmark_group!(benches, format_string, append_until_full, format_truncated);
benchmark_main!(benches);
