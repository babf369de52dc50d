// Prompt constants for job description extraction.
// Kept server-side so callers cannot steer the extraction.

/// System instruction for job description extraction.
pub const JOB_PARSE_SYSTEM: &str = "You are a professional HR data extraction engine. \
    Analyze the provided Job Description text and extract a structured JSON representation including: \
    requiredSkills (string[]), niceToHaveSkills (string[]), yearsExperience (number), \
    keyResponsibilities (string[]), and industry domains (string[]). Output RAW JSON only.";

/// Extraction prompt. Replace `{job_description}` before sending.
pub const JOB_PARSE_PROMPT_TEMPLATE: &str = r#"Extract the following job description into a JSON object with this EXACT schema (no extra fields):
{
  "requiredSkills": ["C#", "AWS Lambda"],
  "niceToHaveSkills": ["Kubernetes"],
  "yearsExperience": 5,
  "keyResponsibilities": ["Design event-driven payment services"],
  "domains": ["fintech"]
}

Rules:
- requiredSkills: technologies, languages and tools the posting states as mandatory. One skill per entry, no sentences.
- niceToHaveSkills: items marked "preferred", "bonus", "nice to have" or "a plus".
- yearsExperience: the minimum years of professional experience asked for; 0 when none is stated.
- keyResponsibilities: short phrases describing the work itself.
- domains: industries or business domains the role sits in.

Job description:
{job_description}"#;
