#[cfg(test)]
pub mod fixtures {
    use std::io::{Cursor, Write};

    use zip::{write::SimpleFileOptions, ZipWriter};

    /// A completion with two well-formed MCQ blocks.
    pub const MCQ_COMPLETION: &str = "Question 1: What enforces memory safety in Rust?
A) The garbage collector
B) The borrow checker
C) The linker
D) The allocator
Correct Answer: B

Question 2: Which keyword declares an immutable binding?
A) let
B) mut
C) static
D) const
Correct Answer: A";

    /// Builds a minimal but valid .docx archive with one `w:p` per paragraph.
    pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut body = String::new();
        for paragraph in paragraphs {
            body.push_str(&format!(
                "<w:p><w:r><w:t>{}</w:t></w:r></w:p>",
                paragraph
            ));
        }
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{}</w:body></w:document>",
            body
        );

        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = ZipWriter::new(&mut buffer);
            writer
                .start_file("word/document.xml", SimpleFileOptions::default())
                .expect("fixture archive entry should start");
            writer
                .write_all(xml.as_bytes())
                .expect("fixture xml should write");
            writer.finish().expect("fixture archive should finish");
        }
        buffer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_mcq_completion_fixture_has_two_blocks() {
        assert_eq!(MCQ_COMPLETION.matches("Correct Answer:").count(), 2);
    }

    #[test]
    fn test_docx_bytes_is_a_zip_archive() {
        let bytes = docx_bytes(&["hello"]);
        // zip local file header magic
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }
}
