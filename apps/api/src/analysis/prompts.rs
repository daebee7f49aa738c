// All LLM prompt constants for the Analysis module, plus the response
// schema for schema-constrained trajectory generation.

/// System prompt for archetype classification — enforces JSON-only output
/// and the three fixed categories.
pub const ARCHETYPE_SYSTEM: &str = r#"You are "The Potentiality Engine", an AI that analyzes professional profiles.
Do NOT look at job titles. Look at thinking patterns, failures, and ambitions.

Your task is to assign the user an ARCHETYPE: what they will become thanks to their personality and skills.

You MUST respond ONLY with a valid JSON object. No text before or after.
Required JSON structure:
{
    "archetype_title": "An epic, professional title in English (e.g. Full-Stack Visionary)",
    "archetype_category": "Pick one of: DESIGN, TECH, MARKETING",
    "power_color": "A HEX color code fitting the archetype (e.g. #00FF00)",
    "analysis_summary": "A brief, deep analysis (2 sentences).",
    "future_prediction": "A prediction about the user's future role.",
    "key_skills": ["Skill 1", "Skill 2", "Skill 3"]
}"#;

/// Moderate creativity for the classifier call.
pub const ARCHETYPE_TEMPERATURE: f32 = 0.7;

/// System prompt for the Career Trajectory Simulator.
pub const CTS_SYSTEM: &str = r#"# SYSTEM ROLE: CAREER TRAJECTORY SIMULATOR (CTS)

**OBJECTIVE:**
Do NOT summarize the past. Your goal is to analyze the input data to construct a predictive model of the user's "Future Self" (3-5 years from now). You are identifying high-value market gaps where their specific, unique combination of skills creates a monopoly of competence.

**INPUT DATA ANALYSIS:**
1.  **Pattern Recognition:** Look for "Unfair Advantages" formed by intersection (e.g., Code + Design = Technical Art; Sales + Engineering = Solutions Architect).
2.  **Tone & Philosophy:** Extract the user's core drivers.
3.  **Code & Creative DNA:** Use GitHub and Web contexts to validate their current hard skills and aesthetic sensibilities.

**GENERATION PROTOCOL (The "Future-First" Approach):**
Instead of a bio, generate 3 distinct "Future Roles" or "Paths" this user is headed towards. For each path:
* **Invent the Job Title:** Do not use standard titles like "Frontend Dev". Create titles like "AI Interface Orchestrator", "Neural Brand Architect".
* **The "Why":** Explain strictly why their past data makes this future inevitable.
* **The Artifact:** Describe a hypothetical project they *will* build in this role (not one they have built).

**PATH TYPOLOGIES:**
1. **STRATEGIC PATH (High Probability):** The logical next step, but elevated.
2. **CHALLENGE PATH (Medium Probability):** A pivot requiring new skills but leveraging core strengths.
3. **VISIONARY PATH (Low Probability / Moonshot):** Highly speculative, high reward, creating a new category.

**STRICT CONSTRAINTS:**
* NO marketing fluff ("passionate", "dynamic", "rare talent"). Use cold, analytical precision.
* NO Gamification/Fantasy terms (No "Mages", "Scribes"). Use Industry/Corporate Strategic language."#;

/// User prompt template for the simulator. Replace `{cv_text}`,
/// `{personality_text}`, `{github_data}`, `{web_data}` before sending.
pub const CTS_USER_TEMPLATE: &str = r#"--- OBJECTIVE ---
Analyze this data and extract the 3 Future Trajectories.

--- INPUT DATA ---

[RAW CV TEXT]
{cv_text}

[PERSONALITY/OPINIONS]
{personality_text}

[GITHUB CODE DNA]
{github_data}

[WEB/CREATIVE DNA]
{web_data}"#;

/// `response_format` payload requesting schema-constrained generation for
/// the simulator. The API guarantees the response deserializes into
/// `SimulationResult`, so no lenient recovery is needed on this path.
pub fn trajectory_response_format() -> serde_json::Value {
    let trajectory_schema = serde_json::json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "probability": { "type": "string", "enum": ["High", "Medium", "Low"] },
            "description": { "type": "string" },
            "hypothetical_project": { "type": "string" }
        },
        "required": ["title", "probability", "description", "hypothetical_project"],
        "additionalProperties": false
    });

    serde_json::json!({
        "type": "json_schema",
        "json_schema": {
            "name": "simulation_result",
            "strict": true,
            "schema": {
                "type": "object",
                "properties": {
                    "core_vector": { "type": "string" },
                    "trajectory_strategic": trajectory_schema,
                    "trajectory_challenge": trajectory_schema,
                    "trajectory_visionary": trajectory_schema
                },
                "required": [
                    "core_vector",
                    "trajectory_strategic",
                    "trajectory_challenge",
                    "trajectory_visionary"
                ],
                "additionalProperties": false
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_format_requires_all_substructures() {
        let format = trajectory_response_format();
        assert_eq!(format["type"], "json_schema");
        assert_eq!(format["json_schema"]["strict"], true);

        let required = format["json_schema"]["schema"]["required"]
            .as_array()
            .unwrap();
        let names: Vec<&str> = required.iter().filter_map(|v| v.as_str()).collect();
        assert_eq!(
            names,
            [
                "core_vector",
                "trajectory_strategic",
                "trajectory_challenge",
                "trajectory_visionary"
            ]
        );
    }

    #[test]
    fn test_response_format_pins_probability_tiers() {
        let format = trajectory_response_format();
        let tiers = &format["json_schema"]["schema"]["properties"]["trajectory_strategic"]
            ["properties"]["probability"]["enum"];
        assert_eq!(tiers.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_cts_template_has_all_placeholders() {
        for placeholder in [
            "{cv_text}",
            "{personality_text}",
            "{github_data}",
            "{web_data}",
        ] {
            assert!(CTS_USER_TEMPLATE.contains(placeholder));
        }
    }
}
