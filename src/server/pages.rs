use askama::Template;

/// Landing page with the upload form, posting to `/upload`
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Matcher</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 720px;
            margin: 40px auto;
            padding: 0 20px;
            color: #333;
            background: #f8f9fa;
        }
        form {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        label { display: block; font-weight: bold; margin-top: 15px; }
        textarea { width: 100%; min-height: 220px; }
        button {
            margin-top: 20px;
            padding: 10px 24px;
            border: none;
            border-radius: 6px;
            background: #007acc;
            color: white;
            cursor: pointer;
        }
        .hint { color: #6c757d; font-size: 0.9em; }
    </style>
</head>
<body>
    <h1>Resume Matcher</h1>
    <p>Upload a resume and paste a job description to see which of {{ vocabulary_size }} known skills they share.</p>
    <form action="/upload" method="post" enctype="multipart/form-data">
        <label for="resume">Resume (PDF or DOCX)</label>
        <input type="file" id="resume" name="resume" accept=".pdf,.docx" required>
        <p class="hint">Maximum size: {{ max_upload_mb }} MB</p>

        <label for="jd">Job description</label>
        <textarea id="jd" name="jd" placeholder="Paste the job description here"></textarea>

        <button type="submit">Match</button>
    </form>
    <p class="hint">resume-matcher v{{ version }}</p>
</body>
</html>"#, ext = "html")]
pub struct IndexPage {
    pub vocabulary_size: usize,
    pub max_upload_mb: String,
    pub version: &'static str,
}

impl IndexPage {
    pub fn new(vocabulary_size: usize, max_upload_bytes: usize) -> Self {
        Self {
            vocabulary_size,
            max_upload_mb: format!("{:.1}", max_upload_bytes as f64 / (1024.0 * 1024.0)),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
