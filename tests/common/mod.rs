//! Shared test utilities and fixtures
//!
//! Notebook builders for integration tests: cells as `serde_json` values,
//! charts as real PNG payloads.

#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use serde_json::{Value, json};

/// Base64 PNG of a solid-color image.
pub fn png_base64(width: u32, height: u32, color: [u8; 4]) -> String {
    let image = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    STANDARD.encode(bytes)
}

pub fn markdown_cell(source: &str) -> Value {
    json!({"cell_type": "markdown", "metadata": {}, "source": source})
}

/// A code cell with its source stored as a line list, the way Jupyter saves it.
pub fn code_cell(source: &str) -> Value {
    let lines: Vec<&str> = source.split_inclusive('\n').collect();
    json!({
        "cell_type": "code",
        "execution_count": null,
        "metadata": {},
        "outputs": [],
        "source": lines
    })
}

pub fn chart_cell(source: &str, png: &str) -> Value {
    let mut cell = code_cell(source);
    cell["outputs"] = json!([
        {"output_type": "stream", "name": "stdout", "text": ["rendering\n"]},
        {
            "output_type": "display_data",
            "metadata": {},
            "data": {"image/png": png, "text/plain": ["<Figure size 640x480 with 1 Axes>"]}
        }
    ]);
    cell
}

pub fn notebook(cells: Vec<Value>) -> Value {
    json!({
        "nbformat": 4,
        "nbformat_minor": 5,
        "metadata": {"kernelspec": {"name": "python3", "display_name": "Python 3"}},
        "cells": cells
    })
}

/// Preamble, schema slide with chart, question slide, plain code slide.
pub fn sample_notebook() -> Value {
    notebook(vec![
        markdown_cell("# Sales analysis"),
        chart_cell(
            "#1. What is X?\ndf.info()\ndf.plot()",
            &png_base64(8, 4, [200, 40, 40, 255]),
        ),
        markdown_cell("Some commentary"),
        code_cell("#2. What is Y?\ndf.groupby('region').sum()"),
        code_cell("print('hi')"),
    ])
}

pub fn write_notebook(dir: &Path, doc: &Value) -> PathBuf {
    let path = dir.join("analysis.ipynb");
    fs::write(&path, serde_json::to_string_pretty(doc).expect("serialize"))
        .expect("write notebook");
    path
}
