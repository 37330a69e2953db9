// src/prompt.rs
//! Instruction block sent to the completion service. Both input texts are
//! embedded verbatim; the response shape is pinned to JSON-only so the
//! parser has something to aim at.

pub fn build_prompt(job_description: &str, resume_text: &str, skill_count: usize) -> String {
    format!(
        r#"You are a professional resume analyzer. I will provide you with a job description and a resume.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume_text}

Task:
1. Be consistent in your analysis.
2. Extract exactly {skill_count} most frequently mentioned skills from the job description.
3. For each skill, determine if the resume explicitly demonstrates this skill (YES or NO).
4. Use only exact or similar keyword matches to determine presence.

Return your analysis in the following JSON format only, with no additional text:
{{
  "skills": [
    {{
      "skill": "Skill name",
      "present": true/false,
      "explanation": "Brief explanation"
    }}
  ]
}}"#
    )
}
