//! Integration tests for the resume matcher

use docx_rs::{Docx, Paragraph, Run};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use resume_matcher::error::{ErrorKind, ResumeMatcherError};
use resume_matcher::input::InputManager;
use resume_matcher::matching::{JobCatalog, MatchScorer};
use resume_matcher::processing::document::RawDocument;
use resume_matcher::processing::profile::ProfileAssembler;
use std::io::Cursor;
use tempfile::TempDir;

const RESUME_LINES: &[&str] = &[
    "John Doe",
    "Professional Experience",
    "Software Engineer, Tech Solutions Inc",
    "Jan 2020 - Present",
    "Developed REST API services in Python and SQL",
    "Education",
    "Bachelor of Science in Computer Science",
    "Springfield University, 2019",
    "Skills",
    "Python, JavaScript, React, Git, Docker",
];

fn build_docx(lines: &[&str]) -> Vec<u8> {
    let mut docx = Docx::new();
    for line in lines {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
    }
    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).unwrap();
    buffer.into_inner()
}

/// One page per entry of `pages`, one text object per line.
fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new("Td", vec![72.into(), (720 - 16 * index as i64).into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn staged_files(dir: &TempDir) -> usize {
    std::fs::read_dir(dir.path()).unwrap().count()
}

#[tokio::test]
async fn test_parse_docx_resume() {
    let document = RawDocument::new(build_docx(RESUME_LINES), "john_doe.docx");

    let profile = ProfileAssembler::new()
        .parse_document(&InputManager::new(), &document)
        .await
        .unwrap();

    for skill in ["Python", "Javascript", "Java", "React", "Git", "Docker", "Sql", "Rest Api"] {
        assert!(profile.skills.contains(skill), "missing {}", skill);
    }
    assert!(!profile.skills.contains("Api"));
    assert_eq!(
        profile.experience,
        vec!["Software Engineer, Tech Solutions Inc", "Jan 2020 - Present"]
    );
    assert_eq!(
        profile.education,
        vec!["Bachelor of Science in Computer Science", "Springfield University, 2019"]
    );
}

#[tokio::test]
async fn test_parse_multi_page_pdf_resume() {
    let bytes = build_pdf(&[&RESUME_LINES[..5], &RESUME_LINES[5..]]);
    let document = RawDocument::new(bytes, "john_doe.PDF");

    let profile = ProfileAssembler::new()
        .parse_document(&InputManager::new(), &document)
        .await
        .unwrap();

    assert!(profile.skills.contains("Python"));
    assert!(profile.skills.contains("Docker"));
    assert_eq!(
        profile.experience,
        vec!["Software Engineer, Tech Solutions Inc", "Jan 2020 - Present"]
    );
    assert_eq!(
        profile.education,
        vec!["Bachelor of Science in Computer Science", "Springfield University, 2019"]
    );
}

#[tokio::test]
async fn test_mislabeled_pdf_is_read_as_plain_text() {
    let text = "Experience\nSenior Engineer at Acme Corp\n2019-2022\nEducation\nBachelor of Science, State University";
    let document = RawDocument::new(text.as_bytes().to_vec(), "resume.pdf");

    let profile = ProfileAssembler::new()
        .parse_document(&InputManager::new(), &document)
        .await
        .unwrap();

    assert_eq!(profile.experience, vec!["Senior Engineer at Acme Corp", "2019-2022"]);
    assert_eq!(profile.education, vec!["Bachelor of Science, State University"]);
}

#[tokio::test]
async fn test_unsupported_format_is_not_staged() {
    let staging = TempDir::new().unwrap();
    let manager = InputManager::new().with_staging_dir(staging.path());
    let document = RawDocument::new(b"Python developer".to_vec(), "resume.txt");

    let err = ProfileAssembler::new()
        .parse_document(&manager, &document)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    assert_eq!(staged_files(&staging), 0);
}

#[tokio::test]
async fn test_staged_upload_removed_on_success_and_failure() {
    let staging = TempDir::new().unwrap();
    let manager = InputManager::new().with_staging_dir(staging.path());

    let good = RawDocument::new(build_docx(RESUME_LINES), "cv.docx");
    assert!(manager.extract(&good).await.is_ok());
    assert_eq!(staged_files(&staging), 0);

    let corrupt = RawDocument::new(b"PK not really a zip".to_vec(), "cv.docx");
    let err = manager.extract(&corrupt).await.unwrap_err();
    assert!(matches!(err, ResumeMatcherError::ExtractionFailure(_)));
    assert_eq!(staged_files(&staging), 0);
}

#[tokio::test]
async fn test_parsing_is_idempotent() {
    let document = RawDocument::new(build_docx(RESUME_LINES), "cv.docx");
    let assembler = ProfileAssembler::new();
    let manager = InputManager::new();

    let first = assembler.parse_document(&manager, &document).await.unwrap();
    let second = assembler.parse_document(&manager, &document).await.unwrap();

    assert_eq!(first.skills, second.skills);
    assert_eq!(first.experience, second.experience);
    assert_eq!(first.education, second.education);
}

#[tokio::test]
async fn test_parse_then_match() {
    let document = RawDocument::new(build_docx(RESUME_LINES), "cv.docx");
    let profile = ProfileAssembler::new()
        .parse_document(&InputManager::new(), &document)
        .await
        .unwrap();

    let result = MatchScorer::new()
        .rank(&profile.skill_labels(), &JobCatalog::sample())
        .unwrap();

    // Python, JavaScript, React, SQL and Git out of six requirements.
    let top = &result.matches[0];
    assert_eq!(top.job_title, "Software Engineer");
    assert_eq!(top.match_score, 83.33);
    assert_eq!(top.missing_skills, vec!["REST APIs"]);

    for pair in result.matches.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
    assert!(result.matches.iter().all(|m| m.match_score > 30.0));
}

#[test]
fn test_empty_skills_are_invalid_input() {
    let err = MatchScorer::new().rank(&[], &JobCatalog::sample()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
