// Static analyzer content. The analyzer is deterministic by design: every
// response carries these fixed blocks, with only the dream-job phrase
// interpolated into the summary template.

/// Role phrase used when the request leaves `dreamJob` blank or absent.
pub const FALLBACK_DREAM_JOB: &str = "a top professional role";

/// Skills the diagnostic always reports as found. Also feeds the
/// recommendation token set, so these must stay lowercase.
pub const FOUND_SKILLS: &[&str] = &["javascript", "react"];

/// Phrases the diagnostic always flags as weak.
pub const WEAK_PHRASES: &[&str] = &["Responsible for"];

/// The five fixed improvement tips returned with every analysis, in order.
pub const SUGGESTIONS: &[&str] = &[
    "ATS Keyword Optimization: Your resume should include keywords from the job description. \
     For a 'Software Engineer' role, add terms like 'API', 'backend', 'frontend', 'testing', \
     and specific frameworks.",
    "Use Action Verbs: Replace passive phrases like 'responsible for' with powerful action \
     verbs like 'Engineered', 'Architected', 'Developed', 'Optimized', or 'Managed'.",
    "Quantify Achievements: Instead of saying you 'improved performance', say you 'Optimized \
     database queries, resulting in a 30% reduction in page load time'. Numbers make your \
     impact clear.",
    "Employ the STAR Method: Structure your experience bullet points using the Situation, \
     Task, Action, Result (STAR) method to create compelling stories of your accomplishments.",
    "File Format: Always submit your resume as a PDF file to preserve formatting, unless the \
     application specifically requests a .docx file.",
];

/// Header block of the rewritten resume.
pub const RESUME_HEADER: &str =
    "Firstname Lastname\n(123) 456-780 | professional.email@example.com | linkedin.com/in/yourprofile";

/// Summary template. Replace `{dream_job}` before returning.
pub const SUMMARY_TEMPLATE: &str =
    "A results-driven professional with skills in JavaScript and React. Seeking to leverage \
     these abilities in a {dream_job} role to build and optimize impactful software solutions.";

/// Experience bullets of the rewritten resume.
pub const RESUME_EXPERIENCE: &[&str] = &[
    "Engineered a full-stack e-commerce platform using the MERN stack, resulting in a 15% \
     increase in user engagement.",
    "Developed and integrated a RESTful API for payment processing, handling over 1,000 \
     transactions per day.",
];

/// Skills block of the rewritten resume.
pub const RESUME_SKILLS: &str =
    "Technical Skills: JavaScript (ES6+), React, Node.js, Express, MongoDB\n\
     Soft Skills: Agile Methodologies, Problem-Solving, Team Collaboration";
