//
//  jenkins-cli
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON output for scripting.

use std::io::{self, Write};

use serde::Serialize;

pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_to() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &serde_json::json!({"id": 42})).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{\n  \"id\": 42\n}\n");
    }
}
