// Prompt fragments shared by every caller of the LLM client.
// Each feature keeps its own prompt builders in a prompts.rs next to it.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for calls that return resume text.
pub const PLAIN_TEXT_SYSTEM: &str = "You are an expert resume writer and ATS specialist. \
    Respond with the resume text only, as plain text. \
    Do NOT use markdown formatting. \
    Do NOT add commentary before or after the resume.";

/// Layout conventions every generated resume must follow so it parses back cleanly.
pub const RESUME_FORMAT_INSTRUCTION: &str = "\
    Put the candidate's name on the first line, then a contact line separated by ' | '. \
    Write each section header on its own line as --- SECTION NAME --- \
    (for example --- EXPERIENCE ---). Start achievement lines with '• '. \
    Do NOT invent employers, dates, degrees or metrics that are not in the input.";
