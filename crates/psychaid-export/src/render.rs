use std::collections::HashMap;

use serde::Serialize;
use tera::{Context, Tera, Value};

use psychaid_core::models::assessment::CompleteAssessment;
use psychaid_core::models::user::provided;
use psychaid_core::report_names::record_number;
use psychaid_instruments::get_category;

use crate::docx::escape_markup;
use crate::error::ExportError;
use crate::report::DISCLAIMER;

/// Name under which the built-in report template is registered.
pub const REPORT_TEMPLATE_NAME: &str = "assessment_report.md";

/// Built-in report template, in the Markdown-ish subset understood by
/// [`crate::docx::generate_docx`]. Every value that comes from the
/// assessment goes through the `literal` filter.
pub const REPORT_TEMPLATE: &str = r#"# PSYCHOLOGICAL ASSESSMENT REPORT
**MEDICAL RECORD - CONFIDENTIAL**
International Medical Record Format
**Record #:** {{ record_number }}

## PATIENT IDENTIFICATION
- **Full Name:** {{ patient.name | literal }}
- **Date of Birth:** Age: {{ patient.age }} years
- **Gender:** {{ patient.gender | literal }}
- **Occupation:** {{ patient.occupation | literal }}
- **Assessment Date:** {{ patient.assessment_date | literal }}
- **Contact Info:** {{ patient.contact_info | literal }}
- **Emergency Contact:** {{ patient.emergency_contact | literal }}

## MEDICAL HISTORY
{{ patient.medical_history | literal }}

## CURRENT MEDICATIONS
{{ patient.current_medications | literal }}

## OVERALL ASSESSMENT SCORE
**{{ overall_score }}%** Overall Psychological Well-being Score

## DETAILED ANALYSIS BY CATEGORY
{% for c in categories %}
### {{ c.name }} ({{ c.severity }})
**Score:** {{ c.score }}/{{ c.max_score }} ({{ c.percentage }}%)
**Recommendations:**
{% for r in c.recommendations %}- {{ r | literal }}
{% endfor %}{% endfor %}
## CLINICAL DIAGNOSIS
{{ diagnosis | literal }}

## DETAILED ANALYSIS
{{ analysis | literal }}

## GENERAL RECOMMENDATIONS
{% for r in recommendations %}- {{ r | literal }}
{% endfor %}
## IMPORTANT MEDICAL DISCLAIMER
> {{ disclaimer }}

**Psychologist Signature:** {{ signatory | literal }}
Licensed Psychologist
**Official Stamp:** {{ organisation | literal }}, Date: {{ issued_on }}

Report generated on {{ generated_on }} at {{ generated_at }}
"#;

#[derive(Debug, Serialize)]
struct PatientView<'a> {
    name: &'a str,
    age: u32,
    gender: &'a str,
    occupation: &'a str,
    assessment_date: &'a str,
    contact_info: &'a str,
    emergency_contact: &'a str,
    medical_history: &'a str,
    current_medications: &'a str,
}

#[derive(Debug, Serialize)]
struct CategoryView<'a> {
    name: String,
    severity: String,
    score: u32,
    max_score: u32,
    percentage: u32,
    recommendations: &'a [String],
}

#[derive(Debug, Serialize)]
struct ReportView<'a> {
    record_number: String,
    patient: PatientView<'a>,
    overall_score: u32,
    categories: Vec<CategoryView<'a>>,
    diagnosis: &'a str,
    analysis: &'a str,
    recommendations: &'a [String],
    disclaimer: &'static str,
    signatory: &'a str,
    organisation: &'a str,
    issued_on: String,
    generated_on: String,
    generated_at: String,
}

/// Tera filter that escapes a string for the Markdown-ish subset.
fn literal(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("`literal` expects a string"))?;
    Ok(Value::String(escape_markup(text)))
}

/// Render a Tera template with any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The fields of `context` become the template variables, and the
/// `literal` filter is available for values that must not be read as
/// markup.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.register_filter("literal", literal);
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the built-in report template for an assessment.
pub fn render_report_markdown(
    assessment: &CompleteAssessment,
    signatory: Option<&str>,
    organisation: &str,
) -> Result<String, ExportError> {
    let info = &assessment.user_info;
    let view = ReportView {
        record_number: record_number(assessment.created_at),
        patient: PatientView {
            name: &info.name,
            age: info.age,
            gender: &info.gender,
            occupation: provided(&info.occupation).unwrap_or("Not specified"),
            assessment_date: &info.assessment_date,
            contact_info: provided(&info.contact_info).unwrap_or("Not provided"),
            emergency_contact: provided(&info.emergency_contact).unwrap_or("Not provided"),
            medical_history: provided(&info.medical_history)
                .unwrap_or("No medical history provided"),
            current_medications: provided(&info.current_medications)
                .unwrap_or("No medications listed"),
        },
        overall_score: assessment.overall_score,
        categories: assessment
            .results
            .iter()
            .map(|r| CategoryView {
                name: get_category(r.category).name().to_string(),
                severity: r.severity.as_str().to_uppercase(),
                score: r.score,
                max_score: r.max_score,
                percentage: r.percentage,
                recommendations: &r.recommendations,
            })
            .collect(),
        diagnosis: &assessment.diagnosis,
        analysis: &assessment.analysis,
        recommendations: &assessment.recommendations,
        disclaimer: DISCLAIMER,
        signatory: signatory.unwrap_or(""),
        organisation,
        issued_on: assessment.created_at.strftime("%Y-%m-%d").to_string(),
        generated_on: assessment.created_at.strftime("%Y-%m-%d").to_string(),
        generated_at: assessment.created_at.strftime("%H:%M:%S UTC").to_string(),
    };

    render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, &view)
}
