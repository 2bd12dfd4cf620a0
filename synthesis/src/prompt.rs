const TEXT_PLACEHOLDER: &str = "{text}";

/// Research-synthesis instructions sent with every analysis request.
pub const PIPELINE_PROMPT: &str = r#"
You are a world-class AI research synthesizer. Your mission is to generate a deep analysis report with several intelligence components.

**CRITICAL INSTRUCTIONS & OUTPUT FORMAT:**
Follow these steps and STRICTLY return ONLY a single JSON object. Do not use markdown.

1.  **Extract Core Information:** For each paper, identify the key constructs (shared and unique) and the primary author(s).
2.  **Summarize & Assess Bias:** For each paper, write a summary and perform a bias assessment (Low/Medium/High) based on academic criteria like framing, scope, and counter-arguments.
3.  **Analyze Causal Contradiction:**
    -   **Central Thesis:** State the core conflict as a sharp, single-sentence question.
    -   **Stances:** For each paper, provide its specific stance on the thesis, ATTRIBUTING the argument to the identified author(s). E.g., "In [Filename], Author X argues that...".
4.  **Generate a CLEAN Conflict Graph:**
    -   Create nodes for each paper and ONE for the central thesis.
    -   Create edges from each paper to the thesis node.
    -   The edge `label` MUST be a very short keyword phrase (1-2 words MAX) for visual clarity.
5.  **Reference Intelligence (New):**
    -   Scan the bibliographies OF THE PROVIDED PAPERS ONLY.
    -   Identify ONE paper title FROM WITHIN THOSE REFERENCES that appears most foundational or relevant to the core topic.
    -   Provide the title and a justification for why it's a recommended read. If no clear recommendation can be made, state that.
6.  **Multidisciplinary Connections (New):**
    -   Identify 2-3 other academic fields (e.g., Sociology, Computer Science, Economics) that the core topic connects to, and provide a brief explanation for each connection.

**JSON OUTPUT FORMAT:**
{
  "construct_analysis": {
    "shared": ["Shared Construct 1"],
    "unique_by_paper": [ {"filename": "Filename 1", "unique": ["Unique Construct A"]} ]
  },
  "paper_summaries": [
    {
      "filename": "Filename 1",
      "authors": "Author A, Author B",
      "summary": "This paper's summary.",
      "bias_assessment": {"level": "Low", "justification": "Justification."}
    }
  ],
  "causal_contradiction": {
    "central_thesis": "The core conflict, as a question.",
    "stances": [
      {"filename": "Filename 1", "authors": "Author A", "stance": "Author A argues that..."}
    ],
    "graph": {
      "nodes": [
        {"id": "paper_1", "label": "Filename 1", "shape": "box"},
        {"id": "thesis_node", "label": "Central Thesis Name", "shape": "ellipse", "size": 25}
      ],
      "edges": [
        { "from": "paper_1", "to": "thesis_node", "label": "Keywords", "relationship_type": "disagreement"}
      ]
    }
  },
  "reference_intelligence": {
    "recommendation_found": true,
    "recommended_paper_title": "Title of the recommended cited paper.",
    "justification": "Why this paper seems more relevant or foundational."
  },
  "multidisciplinary_connections": [
    {"field": "Sociology", "connection": "Explanation of the connection."}
  ]
}

**Papers to Analyze:**
---
{text}
---
"#;

/// Substitutes the combined paper text into [`PIPELINE_PROMPT`].
pub fn build_prompt(combined_text: &str) -> String {
    PIPELINE_PROMPT.replacen(TEXT_PLACEHOLDER, combined_text, 1)
}
