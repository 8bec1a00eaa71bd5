use promptnx::SynthesisRequest;

/// The reference request from the generator form's happy path.
pub fn landing_page_request() -> SynthesisRequest {
    SynthesisRequest::new(
        "Write a landing page",
        "marketing",
        "chatgpt",
        "markdown",
        "english",
    )
}
