// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use yaml_cst::scanner::{end_of_block_indent, end_of_line, end_of_white_space};
use yaml_cst::{BlockScalar, BlockStyle, ParseContext};

fn folded_source(lines: usize) -> String {
    let mut src = String::from("description: >\n");
    for i in 0..lines {
        if i % 8 == 7 {
            src.push_str("    more indented line\n\n");
        } else {
            src.push_str("  plain folded line of text\n");
        }
    }
    src.push_str("next: value\n");
    src
}

pub fn benchmark_line_scanning(c: &mut Criterion) {
    let src = folded_source(1000);
    c.bench_function("scan_lines", |b| {
        b.iter(|| {
            let mut offset = 0;
            let mut lines = 0;
            while offset < src.len() {
                let indent_end = end_of_block_indent(&src, 0, offset).unwrap_or(offset);
                let content = end_of_white_space(&src, indent_end);
                offset = end_of_line(&src, content) + 1;
                lines += 1;
            }
            black_box(lines)
        });
    });
}

pub fn benchmark_block_scalar(c: &mut Criterion) {
    let src = folded_source(1000);
    let context = ParseContext::new(&src, 0);
    c.bench_function("parse_folded_block", |b| {
        b.iter(|| {
            let mut block = BlockScalar::new(BlockStyle::Folded, Vec::new());
            black_box(block.parse(&context, 13))
        });
    });

    let mut block = BlockScalar::new(BlockStyle::Folded, Vec::new());
    block.parse(&context, 13);
    c.bench_function("folded_str_value", |b| b.iter(|| black_box(block.str_value())));
}

criterion_group!(benches, benchmark_line_scanning, benchmark_block_scalar);
criterion_main!(benches);
