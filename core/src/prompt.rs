use crate::knowledge::SUBJECT_NAME;
use crate::types::ChatMessage;

const GUIDELINES: &[&str] = &[
    "Be conversational and friendly",
    "Provide specific examples and numbers when available",
    "If asked about technical details, explain them clearly",
    "Focus on Kabeer's achievements and impact",
    "Keep responses concise but informative (2-4 sentences typically)",
    "Use \"Kabeer\" or \"he\" when referring to him in third person",
];

/// Builds the system instruction: persona, the knowledge text verbatim, then tone guidelines.
pub fn system_prompt(knowledge: &str) -> String {
    let mut prompt = format!(
        "You are an AI assistant that knows everything about {name} based on his resume and \
         professional background. Use the following knowledge base to answer questions about \
         Kabeer. Be helpful, conversational, and provide specific details from his background \
         when relevant. If asked about something not in the knowledge base, politely say you \
         don't have that specific information but offer to help with what you do know.\n\n\
         Knowledge Base:\n{knowledge}\n\nGuidelines:",
        name = SUBJECT_NAME,
    );
    for line in GUIDELINES {
        prompt.push_str("\n- ");
        prompt.push_str(line);
    }
    prompt
}

/// The two turns sent for every question: the system instruction and the caller's message as-is.
pub fn build_turns(knowledge: &str, message: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt(knowledge)),
        ChatMessage::user(message),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn test_system_prompt_embeds_knowledge_between_sections() {
        let prompt = system_prompt("KNOWLEDGE-MARKER");
        let knowledge_at = prompt.find("KNOWLEDGE-MARKER").unwrap();
        let header_at = prompt.find("Knowledge Base:\n").unwrap();
        let guidelines_at = prompt.find("Guidelines:").unwrap();

        assert!(header_at < knowledge_at);
        assert!(knowledge_at < guidelines_at);
        assert!(prompt.contains("2-4 sentences"));
        assert!(prompt.ends_with("in third person"));
    }

    #[test]
    fn test_build_turns_keeps_message_verbatim() {
        let message = "  What does he do at EY?\n";
        let turns = build_turns("facts", message);

        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::System);
        assert!(turns[0].content.contains("facts"));
        assert_eq!(turns[1].role, Role::User);
        assert_eq!(turns[1].content, message);
    }
}
