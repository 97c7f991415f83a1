//! Fixed texts sent to the model with every conversation.

/// Persona and behavioural rules, sent as the request's system instruction.
pub const SYSTEM_INSTRUCTION: &str = "Welcome to the Hoppers Hub AI companion! You can ask me any question about the Hoppers Hub datasets and I'll do my best to answer:

Role and Purpose:

* You are an analyst on the CG&E sector team tasked with understanding insights from large datasets.
* You will use the Hopper's Hub data, which provides the DM&A (likely Data, Measurement, and Analytics) team with metrics based on the VMAXX strategy.
* Your goal is to help CG&E teams understand their clients' data, tech, and measurement maturity.
* This tool facilitates effective business planning, promotes knowledge sharing, and ensures a unified perspective.

Behaviors and Rules:

1) Data Interpretation:
a) Analyze the Hopper's Hub data to identify key insights and trends related to client maturity.
b) Clearly explain the meaning and implications of various metrics and data points.
c) Connect data insights to the VMAXX strategy and its goals.

2) Client Understanding:
a) Help CG&E teams understand their clients' current state in terms of data, technology, and measurement.
b) Identify areas where clients can improve their maturity and achieve better results.
c) Translate complex data concepts into clear and actionable recommendations for clients.

3) Business Planning:
a) Use data insights to inform business planning and decision-making for CG&E teams.
b) Provide data-driven recommendations for resource allocation, strategy development, and project prioritization.
c) Help teams align their activities with the overall VMAXX strategy and business goals.

4) Knowledge Sharing:
a) Share insights and best practices with CG&E teams to promote knowledge sharing and collaboration.
b) Facilitate discussions and workshops to help teams understand and utilize the Hopper's Hub data effectively.
c) Create clear and concise reports and presentations to communicate key findings to stakeholders.

Tone and Style:
* Maintain a professional and analytical tone.
* Use clear and concise language, avoiding jargon or technical terms when possible.
* Be objective and data-driven in your analysis and recommendations.
* Focus on providing actionable insights that can help CG&E teams achieve their goals.";

pub const DOCUMENT_INTRO_PREFIX: &str = "Here is the content of";

pub const SUMMARIZE_REQUEST: &str = "summarize the data";

/// Opening of the canned summary, followed by one line per reference document.
pub const SUMMARY_HEADER: &str = "Okay, here's a summary of the data you provided, focusing on key aspects relevant to the CG&E DM&A Ops Pillar and the VMAXX strategy:

**Overall Context:**";

/// Body of the canned summary, describing the dataset columns.
pub const SUMMARY_BODY: &str = "

**Key Themes and Potential Insights (based on column headings):**

1.  **Client Segmentation:**

    *   `vertical`, `parent`, `division`, `priority_account`, `subvertical`:  These columns allow you to segment clients based on industry, company structure, and account priority.  This is fundamental for understanding if maturity levels vary across different client types.

2.  **Value Delivery and Stakeholder Alignment:**

    *   `value_brand_building`, `value_consideration`, `value_action`:  These metrics are likely tied to the \"Value\" pillar of VMAXX.  Analyzing these, you can assess how well clients are progressing through the marketing funnel.
    *   `value_delivered_stakeholder`:  Indicates the stakeholder level to whom value is being delivered (Day-to-Day, Mid-Level, C-Level).
    *   `value_delivered_linked`, `value_delivered_group`: Provides info on value delivery and validation.

3.  **Data and Measurement Maturity:**

    *   `customer_sot_*`:  A significant portion of the data focuses on the \"Source of Truth\" (SOT) for measurement.  This helps gauge the sophistication of a client's data infrastructure and measurement approach.  For example, are they relying on basic Google Analytics, or do they have advanced 3P attribution models?
    *    `maxroi_learning_agenda_score`: A score of the client's learning agenda can help gauge the progress of the clients measurement maturity
    *   `xmedia_*`:  These columns capture how clients are approaching cross-channel measurement, using MMM, MTA, and reach metrics.

4.  **Experimentation and Optimization:**

    *   `maxroi_experiments_*`:  These columns provide insights into whether clients are actively using experimentation to validate and optimize their marketing efforts.

5.  **X-Media Strategy**
    *   `xmedia_triad_group`, `xmedia_trifecta_group`:  These could indicate adoption of a \"Triad\" (likely MMM, MTA, and Experimentation) or \"Trifecta\" approach to marketing measurement and optimization. This is a key indicator of maturity.

**Potential Analysis and Next Steps:**

1.  **Data Cleaning and Preparation:**  The raw data will likely need cleaning (handling missing values, inconsistencies, etc.) before analysis.

2.  **Descriptive Statistics:** Calculate basic statistics (averages, medians, distributions) for key metrics across different client segments.

3.  **Correlation Analysis:**  Explore correlations between different metrics.  For example:

    *   Is there a correlation between SOT sophistication (e.g., using 3P attribution) and higher conversion values?
    *   Does a higher \"Learning Agenda\" score correlate with better Max ROI metrics?
    *   Is there a correlation between VMAXX scores and rolling revenue metrics?

4.  **Trend Analysis:** Compare H2 2024 and H1 2025 data to identify trends in client maturity over time. Are clients generally improving in their data and measurement capabilities?

5.  **Benchmarking:**  Establish benchmarks for different maturity levels. This will allow you to quickly assess a client's current state and identify areas for improvement.

6.  **Actionable Insights and Recommendations:** Based on the analysis, develop data-driven recommendations for CG&E teams to help their clients improve their VMAXX scores and achieve better business outcomes.";

pub const LEAD_ANALYST_QUESTION: &str = "who is the analytical lead for hellofresh?";

pub const LEAD_ANALYST_ANSWER: &str =
    "Based on the provided data, the analytical lead for HelloFresh Group is Max Levitin.";
