use crate::error::{Error, Result};
use crate::models::request::ClassificationRequest;
use crate::taxonomy::Taxonomy;

const PREAMBLE: &str = "Ты - эксперт автомеханической классификационной системы. \
Твоя работа - определить, к какой категории ремонта относится заявка клиента.";

const TASK: &str = "Определи наиболее подходящую категорию ремонта. \
Если заявка неоднозначна или может относиться к нескольким категориям, выбери самую актуальную.";

pub const FORMAT_DIRECTIVE: &str = r#"Верни ответ строго в виде одного JSON-объекта ровно с тремя полями, без какого-либо текста до или после него:
{
    "category": "Название категории из списка выше",
    "confidence": число от 0 до 1,
    "explanation": "Краткое объяснение, почему была выбрана эта категория"
}"#;

/// Renders the instruction sent to the backend. Categories are listed in name
/// order, so the same taxonomy and request always give the same text.
pub fn build_prompt(taxonomy: &Taxonomy, request: &ClassificationRequest) -> Result<String> {
    if request.is_blank() {
        return Err(Error::EmptyRequest);
    }

    let mut prompt = String::new();
    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\nДоступные категории ремонта:\n");
    for name in taxonomy.category_names() {
        prompt.push_str(&format!("- {}\n", name));
    }

    prompt.push_str("\nЗаявка клиента:\n");
    prompt.push_str(&request.text);
    prompt.push('\n');
    if let Some(make) = &request.vehicle_make {
        prompt.push_str(&format!("Марка автомобиля: {}\n", make));
    }

    prompt.push('\n');
    prompt.push_str(TASK);
    prompt.push_str("\n\n");
    prompt.push_str(FORMAT_DIRECTIVE);
    prompt.push('\n');

    Ok(prompt)
}
