// All LLM prompt templates for the pitch workflow, one per step.
// Builders are pure: identical inputs yield byte-identical prompts.

use crate::directory::JournalistProfile;

/// Match-step prompt template. Replace `{story_idea}` and `{roster_table}`.
const MATCH_PROMPT_TEMPLATE: &str = r#"Based on the story idea below, suggest the 3 most relevant journalists from this list.
Return their names only, one per line.

Story Idea:
"{story_idea}"

Journalists:
{roster_table}"#;

/// Generate-step prompt template. Replace `{story_idea}` and the four
/// profile fields.
const GENERATE_PROMPT_TEMPLATE: &str = r#"You are a PR assistant helping pitch a story to a Financial Times journalist.

- Story idea: "{story_idea}"
- Journalist: {name}
- Beat: {beat}
- Recent article: "{recent_article_title}"
- Excerpt: "{recent_article_excerpt}"

Write a concise, persuasive email pitch (under 150 words) with:
- A subject line
- A strong opening hook
- Clear relevance to the Financial Times audience"#;

/// Score-step prompt template. Replace `{pitch}`.
const SCORE_PROMPT_TEMPLATE: &str = r#"You are a PR writing coach. Rate the following pitch on 4 criteria from 1-10:

1. Clarity - Is it clearly written?
2. Relevance - Is it relevant to the journalist's beat and the Financial Times readership?
3. Persuasiveness - Does it make a compelling case to cover the story?
4. Brevity - Is it concise and avoids fluff (target under 150 words)?

Provide scores and a brief reason for each.

PITCH:
{pitch}"#;

/// Suggest-step prompt template. Replace `{pitch}`.
const SUGGEST_PROMPT_TEMPLATE: &str = r#"Act as an expert media pitching editor. Here is a PR pitch:

---
{pitch}
---

Suggest 2-3 specific improvements to make it more compelling, relevant, or concise.
Make each suggestion actionable (e.g., "Rephrase the hook to emphasize urgency")."#;

/// Builds the journalist-matching prompt: the story idea plus a tabular
/// listing of every profile's name, beat, and recent title.
pub fn build_match_prompt(story_idea: &str, profiles: &[JournalistProfile]) -> String {
    MATCH_PROMPT_TEMPLATE
        .replace("{story_idea}", story_idea)
        .replace("{roster_table}", &format_roster_table(profiles))
}

/// Builds the pitch-generation prompt. Embeds the story idea and all four
/// profile fields verbatim.
pub fn build_generate_prompt(story_idea: &str, profile: &JournalistProfile) -> String {
    GENERATE_PROMPT_TEMPLATE
        .replace("{story_idea}", story_idea)
        .replace("{name}", &profile.name)
        .replace("{beat}", &profile.beat)
        .replace("{recent_article_title}", &profile.recent_article_title)
        .replace("{recent_article_excerpt}", &profile.recent_article_excerpt)
}

/// Builds the quality-evaluation prompt around the unmodified pitch text.
pub fn build_score_prompt(pitch: &str) -> String {
    SCORE_PROMPT_TEMPLATE.replace("{pitch}", pitch)
}

/// Builds the revision-suggestions prompt around the unmodified pitch text.
pub fn build_suggest_prompt(pitch: &str) -> String {
    SUGGEST_PROMPT_TEMPLATE.replace("{pitch}", pitch)
}

/// One header row plus one pipe-separated row per profile. Excerpts are left
/// out of the match prompt — the beat and recent title carry the signal.
fn format_roster_table(profiles: &[JournalistProfile]) -> String {
    let mut table = String::from("name | beat | recent_article_title");
    for profile in profiles {
        table.push('\n');
        table.push_str(&format!(
            "{} | {} | {}",
            profile.name, profile.beat, profile.recent_article_title
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> JournalistProfile {
        JournalistProfile {
            name: "A. Writer".to_string(),
            beat: "Tech".to_string(),
            recent_article_title: "X".to_string(),
            recent_article_excerpt: "Y".to_string(),
        }
    }

    #[test]
    fn test_match_prompt_lists_every_profile() {
        let profiles = vec![
            profile(),
            JournalistProfile {
                name: "B. Reporter".to_string(),
                beat: "Retail".to_string(),
                recent_article_title: "Luxury rebound".to_string(),
                recent_article_excerpt: "unused".to_string(),
            },
        ];
        let prompt = build_match_prompt("AI in retail", &profiles);

        assert!(prompt.contains("AI in retail"));
        assert!(prompt.contains("A. Writer | Tech | X"));
        assert!(prompt.contains("B. Reporter | Retail | Luxury rebound"));
        // excerpts stay out of the roster table
        assert!(!prompt.contains("unused"));
    }

    #[test]
    fn test_generate_prompt_embeds_idea_and_all_profile_fields_verbatim() {
        let prompt = build_generate_prompt("AI in retail", &profile());

        assert!(prompt.contains("AI in retail"));
        assert!(prompt.contains("A. Writer"));
        assert!(prompt.contains("Tech"));
        assert!(prompt.contains("X"));
        assert!(prompt.contains("Y"));
    }

    #[test]
    fn test_score_prompt_embeds_exact_pitch_text() {
        let pitch = "Subject: AI is rewriting retail\n\nDear A. Writer, ...";
        assert!(build_score_prompt(pitch).contains(pitch));
    }

    #[test]
    fn test_suggest_prompt_embeds_exact_pitch_text() {
        let pitch = "Subject: AI is rewriting retail\n\nDear A. Writer, ...";
        assert!(build_suggest_prompt(pitch).contains(pitch));
    }

    #[test]
    fn test_builders_are_deterministic() {
        let profiles = vec![profile()];
        assert_eq!(
            build_match_prompt("idea", &profiles),
            build_match_prompt("idea", &profiles)
        );
        assert_eq!(
            build_generate_prompt("idea", &profiles[0]),
            build_generate_prompt("idea", &profiles[0])
        );
        assert_eq!(build_score_prompt("pitch"), build_score_prompt("pitch"));
        assert_eq!(build_suggest_prompt("pitch"), build_suggest_prompt("pitch"));
    }
}
