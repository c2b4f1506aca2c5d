use crate::utils::helper::contains_ignore_case;

/// Scripted model output used when the completion service returns nothing.
///
/// Depends only on the question. Keywords are checked in order: `add`, then
/// `delete`/`remove`, then `list`/`show`.
pub fn fallback_response(question: &str) -> &'static str {
    let mentions = |keyword: &str| contains_ignore_case(question, keyword);

    if mentions("add") {
        "Thought: I need to add a new todo item.\nAction: add_todo[New todo item]"
    } else if mentions("delete") || mentions("remove") {
        "Thought: I need to delete a todo item.\nAction: delete_todo[1]"
    } else if mentions("list") || mentions("show") {
        "Thought: I need to list all todos.\nAction: list_todos[]"
    } else {
        "Thought: I'm not sure what to do with this request."
    }
}
