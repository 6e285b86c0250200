//! Builtin recommendation content.
//!
//! Context-specific advice variants for the highest-leverage constructs.
//! Each covered construct ends with exactly one context-free default
//! variant acting as the fallback.

use crate::domain::profile::{BusinessStage, Industry, OrganizationType, TeamSize};

use super::context::RecommendationContext;
use super::variant::{AdvicePriority, RecommendationVariant, Timeframe, VariantStep};

macro_rules! step {
    ($action:literal, $tf:ident) => {
        VariantStep {
            action: $action,
            timeframe: Timeframe::$tf,
        }
    };
}

macro_rules! ctx {
    ($construct:literal $(, orgs: $orgs:expr)? $(, industries: $industries:expr)? $(, stages: $stages:expr)? $(, teams: $teams:expr)?) => {
        RecommendationContext {
            construct: $construct,
            org_types: ctx!(@or &[] $(, $orgs)?),
            industries: ctx!(@or &[] $(, $industries)?),
            business_stages: ctx!(@or &[] $(, $stages)?),
            team_sizes: ctx!(@or &[] $(, $teams)?),
            regions: &[],
        }
    };
    (@or $default:expr) => { $default };
    (@or $default:expr, $value:expr) => { $value };
}

pub(super) static BUILTIN_VARIANTS: &[RecommendationVariant] = &[
    // ── Financial Reserves ──────────────────────────────────────────────
    RecommendationVariant {
        id: "fin-solo-startup",
        context: ctx!("financialReserves",
            orgs: &[OrganizationType::Individual],
            stages: &[BusinessStage::Idea, BusinessStage::Startup]),
        title: "Build Your Craft Emergency Fund",
        description: "Start a dedicated emergency fund by setting aside a fixed share of \
                      every sale until you reach two months of essential expenses.",
        steps: &[
            step!("Open a separate savings account labeled as your business reserve", ThisWeek),
            step!("Calculate your monthly essential expenses (materials, tools, studio rent)", ThisWeek),
            step!("Set up an automatic transfer of 10% from each sale into the reserve", ThisWeek),
            step!("Track progress toward a two-month reserve goal", Ongoing),
        ],
        related_case_studies: &["palestinian-tatreez", "bangladeshi-nakshi-kantha"],
        impact: "Provides a crucial buffer against slow seasons and unexpected expenses",
        priority: AdvicePriority::Critical,
    },
    RecommendationVariant {
        id: "fin-coop",
        context: ctx!("financialReserves",
            orgs: &[OrganizationType::Cooperative, OrganizationType::CraftGuild]),
        title: "Establish a Cooperative Reserve Fund",
        description: "Create a formal reserve fund policy with member buy-in, targeting \
                      three to six months of operating expenses with clear governance for \
                      accessing the funds.",
        steps: &[
            step!("Propose a reserve fund policy at the next member meeting", ThisMonth),
            step!("Set a contribution rate (5-10% of revenues) and a target amount", ThisMonth),
            step!("Agree clear criteria for when reserves can be drawn down", ThisMonth),
            step!("Open a separate interest-bearing account for the reserve", ThisQuarter),
        ],
        related_case_studies: &["moroccan-fes-pottery", "vietnamese-craft-villages"],
        impact: "Protects all members during market disruptions",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "fin-community-org",
        context: ctx!("financialReserves", orgs: &[OrganizationType::CommunityOrg]),
        title: "Diversify Funding and Build Unrestricted Reserves",
        description: "Reduce grant dependency by building unrestricted reserves through \
                      diversified revenue streams, aiming for six months of operating costs.",
        steps: &[
            step!("Audit current funding sources and identify concentration risk", ThisWeek),
            step!("Develop one earned revenue stream (workshops, products, services)", ThisQuarter),
            step!("Negotiate unrestricted funding in upcoming grant applications", Ongoing),
            step!("Set a board policy for a minimum reserve level", ThisMonth),
        ],
        related_case_studies: &["nunavut-indigenous-enterprises"],
        impact: "Ensures program continuity regardless of grant cycles",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "fin-business-scale",
        context: ctx!("financialReserves",
            orgs: &[OrganizationType::ForProfit],
            stages: &[BusinessStage::Scaling, BusinessStage::Established]),
        title: "Strategic Cash Reserve Management",
        description: "Maintain a six-month operating reserve plus a separate strategic \
                      fund, with tiered reserves for different disruption scenarios.",
        steps: &[
            step!("Review current cash position and burn rate", ThisWeek),
            step!("Set up a tiered reserve structure (emergency, opportunity, growth)", ThisMonth),
            step!("Establish a credit line for additional flexibility", ThisQuarter),
            step!("Create a quarterly reserve review process", Ongoing),
        ],
        related_case_studies: &["jamaican-cultural-industries"],
        impact: "Enables opportunistic growth while protecting against downturns",
        priority: AdvicePriority::Medium,
    },
    RecommendationVariant {
        id: "fin-default",
        context: RecommendationContext::generic("financialReserves"),
        title: "Build Operating Reserves",
        description: "Build financial reserves of three to six months of operating \
                      expenses to weather disruptions and seize opportunities.",
        steps: &[
            step!("Calculate your monthly operating expenses", ThisWeek),
            step!("Open a separate reserve account", ThisWeek),
            step!("Set up regular contributions (5-10% of revenue)", ThisMonth),
            step!("Set milestone targets and review progress", Ongoing),
        ],
        related_case_studies: &[],
        impact: "Critical buffer against disruptions",
        priority: AdvicePriority::Critical,
    },
    // ── Traditional Knowledge ───────────────────────────────────────────
    RecommendationVariant {
        id: "tk-solo",
        context: ctx!("traditionalKnowledge", orgs: &[OrganizationType::Individual]),
        title: "Document Your Craft Journey",
        description: "Create a personal knowledge archive combining your own techniques \
                      with the stories of the mentors and elders who taught you.",
        steps: &[
            step!("Start a craft journal documenting techniques you use daily", ThisWeek),
            step!("Record video of yourself demonstrating key techniques", ThisMonth),
            step!("Interview one elder or mentor about traditional methods", ThisMonth),
            step!("Organize files with clear naming and a backup system", ThisQuarter),
        ],
        related_case_studies: &["palestinian-tatreez", "korean-hanji"],
        impact: "Preserves your unique knowledge for future generations",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "tk-community",
        context: ctx!("traditionalKnowledge",
            orgs: &[
                OrganizationType::Cooperative,
                OrganizationType::CraftGuild,
                OrganizationType::IndigenousEnterprise,
            ]),
        title: "Launch a Community Documentation Program",
        description: "Work with elders and master practitioners to record the techniques, \
                      stories, and protocols behind your collective practice, under \
                      community-agreed access rules.",
        steps: &[
            step!("Identify the knowledge holders most urgent to record", ThisWeek),
            step!("Agree community protocols for what may be shared and with whom", ThisMonth),
            step!("Schedule regular recording sessions with practitioners", ThisQuarter),
            step!("Store the archive with community-controlled access", Ongoing),
        ],
        related_case_studies: &["vietnamese-craft-villages", "nunavut-indigenous-enterprises"],
        impact: "Foundation for authentic cultural innovation",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "tk-default",
        context: RecommendationContext::generic("traditionalKnowledge"),
        title: "Document Traditional Knowledge",
        description: "Document and digitize the traditional knowledge behind your work \
                      together with the community that holds it.",
        steps: &[
            step!("List the techniques and practices central to your work", ThisWeek),
            step!("Choose a simple recording format (notes, photos, video)", ThisMonth),
            step!("Record one practice end-to-end as a pilot", ThisMonth),
            step!("Review coverage and fill gaps on a regular cycle", Ongoing),
        ],
        related_case_studies: &[],
        impact: "Foundation for authentic cultural innovation",
        priority: AdvicePriority::High,
    },
    // ── Adaptive Capacity ───────────────────────────────────────────────
    RecommendationVariant {
        id: "adapt-startup",
        context: ctx!("adaptiveResponse",
            stages: &[BusinessStage::Idea, BusinessStage::Startup]),
        title: "Build Agility Into Your Foundation",
        description: "Formalize the natural adaptability of a young organization with \
                      simple systems that let you pivot quickly while staying true to \
                      your cultural mission.",
        steps: &[
            step!("Write a one-page protocol for responding to sudden changes", ThisWeek),
            step!("Set up a monthly check-in to assess what is working", ThisWeek),
            step!("Identify two or three alternative revenue streams you could activate", ThisMonth),
            step!("Build relationships with three potential partners before you need them", ThisQuarter),
        ],
        related_case_studies: &["palestinian-tatreez"],
        impact: "Highest discriminatory power for resilience outcomes",
        priority: AdvicePriority::Critical,
    },
    RecommendationVariant {
        id: "adapt-established",
        context: ctx!("adaptiveResponse",
            stages: &[BusinessStage::Scaling, BusinessStage::Established]),
        title: "Institutionalize Adaptive Capacity",
        description: "Turn hard-won crisis experience into repeatable systems that let \
                      the organization respond faster to the next disruption.",
        steps: &[
            step!("Document how you responded to past crises", ThisMonth),
            step!("Create a crisis response playbook with clear roles", ThisQuarter),
            step!("Run an annual disruption-scenario planning exercise", ThisQuarter),
            step!("Cross-train so multiple people can fill key roles", Ongoing),
        ],
        related_case_studies: &["vietnamese-craft-villages", "nunavut-indigenous-enterprises"],
        impact: "Ensures organizational resilience as you scale",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "adapt-coop",
        context: ctx!("adaptiveResponse",
            orgs: &[OrganizationType::Cooperative, OrganizationType::CraftGuild]),
        title: "Collective Adaptive Capacity",
        description: "Use your collective strength: shared response systems help all \
                      members weather disruptions together.",
        steps: &[
            step!("Create a member communication tree for rapid information sharing", ThisWeek),
            step!("Establish mutual aid protocols between members", ThisMonth),
            step!("Pool resources for shared equipment or facilities", ThisQuarter),
            step!("Develop group purchasing and selling agreements", ThisQuarter),
        ],
        related_case_studies: &["moroccan-fes-pottery", "bangladeshi-nakshi-kantha"],
        impact: "Multiplies individual resilience through collective action",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "adapt-default",
        context: RecommendationContext::generic("adaptiveResponse"),
        title: "Develop Systematic Adaptive Capacity",
        description: "Build learning and response mechanisms that help you adjust to \
                      disruptions while maintaining cultural values.",
        steps: &[
            step!("Reflect on past disruptions and what worked", ThisWeek),
            step!("Create a simple decision framework for responding to change", ThisMonth),
            step!("Identify early warning signs to monitor", ThisMonth),
            step!("Build relationships with others who can help in a crisis", Ongoing),
        ],
        related_case_studies: &[],
        impact: "Highest discriminatory power for resilience outcomes",
        priority: AdvicePriority::Critical,
    },
    // ── Community Involvement ───────────────────────────────────────────
    RecommendationVariant {
        id: "comm-individual",
        context: ctx!("communityInvolvement", orgs: &[OrganizationType::Individual]),
        title: "Build Your Community Advisory Circle",
        description: "Even as a solo practitioner you can gather a small circle of \
                      community members who guide your cultural decisions.",
        steps: &[
            step!("Identify three to five community members whose opinion you value", ThisWeek),
            step!("Invite them to an informal advisory conversation", ThisMonth),
            step!("Share your current work and ask for honest feedback", ThisMonth),
            step!("Schedule quarterly check-ins to maintain the relationships", Ongoing),
        ],
        related_case_studies: &["palestinian-tatreez"],
        impact: "Keeps your work connected to community values",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "comm-org-new",
        context: ctx!("communityInvolvement",
            orgs: &[OrganizationType::ForProfit, OrganizationType::CulturalInstitution]),
        title: "Establish a Community Advisory Board",
        description: "Create formal mechanisms for community input into your cultural \
                      work, moving beyond consultation toward co-creation.",
        steps: &[
            step!("Map stakeholder communities and their interests", ThisWeek),
            step!("Identify potential advisory board members from key communities", ThisMonth),
            step!("Draft an advisory board charter with clear decision rights", ThisMonth),
            step!("Launch the board with clear expectations and fair compensation", ThisQuarter),
        ],
        related_case_studies: &["nunavut-indigenous-enterprises", "mikmaq-clearwater"],
        impact: "Key predictor of long-term success",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "comm-coop-deepen",
        context: ctx!("communityInvolvement",
            orgs: &[
                OrganizationType::Cooperative,
                OrganizationType::CommunityOrg,
                OrganizationType::IndigenousEnterprise,
            ]),
        title: "Deepen Community Decision-Making",
        description: "Move beyond basic consultation to shared decision-making where \
                      community voices shape strategic direction.",
        steps: &[
            step!("Audit current community involvement mechanisms", ThisWeek),
            step!("Identify decisions that should take more community input", ThisMonth),
            step!("Create accessible participation options (meetings, online, written)", ThisMonth),
            step!("Report back on how community input influenced decisions", Ongoing),
        ],
        related_case_studies: &["vietnamese-craft-villages", "moroccan-fes-pottery"],
        impact: "Strengthens legitimacy and long-term sustainability",
        priority: AdvicePriority::Medium,
    },
    RecommendationVariant {
        id: "comm-default",
        context: RecommendationContext::generic("communityInvolvement"),
        title: "Establish Community Advisory Processes",
        description: "Create mechanisms for cultural practitioners from source \
                      communities to take part in development decisions.",
        steps: &[
            step!("Identify key community stakeholders", ThisWeek),
            step!("Reach out to potential advisors", ThisMonth),
            step!("Create a regular consultation schedule", ThisMonth),
            step!("Document and act on community feedback", Ongoing),
        ],
        related_case_studies: &[],
        impact: "Key predictor of long-term success",
        priority: AdvicePriority::High,
    },
    // ── Cultural Authenticity ───────────────────────────────────────────
    RecommendationVariant {
        id: "auth-forprofit",
        context: ctx!("culturalAuthenticity", orgs: &[OrganizationType::ForProfit]),
        title: "Earn Community Validation",
        description: "Build genuine relationships with source communities and create \
                      formal processes for cultural validation of your products.",
        steps: &[
            step!("Identify the source communities for your cultural elements", ThisWeek),
            step!("Reach out to community leaders to discuss partnership", ThisMonth),
            step!("Create a product review process involving community members", ThisQuarter),
            step!("Develop a benefit-sharing arrangement with the source community", ThisQuarter),
        ],
        related_case_studies: &["palestinian-tatreez", "bangladeshi-nakshi-kantha"],
        impact: "Critical for market differentiation and community trust",
        priority: AdvicePriority::Critical,
    },
    RecommendationVariant {
        id: "auth-community",
        context: ctx!("culturalAuthenticity",
            orgs: &[
                OrganizationType::Cooperative,
                OrganizationType::CommunityOrg,
                OrganizationType::IndigenousEnterprise,
                OrganizationType::CraftGuild,
            ]),
        title: "Formalize Cultural Protocols",
        description: "Document and institutionalize your existing cultural practices so \
                      authenticity is maintained as you grow.",
        steps: &[
            step!("Work with elders to document cultural protocols", ThisMonth),
            step!("Write guidelines for cultural elements in products", ThisMonth),
            step!("Train all team members on the protocols", ThisQuarter),
            step!("Establish a review process for new product lines", ThisQuarter),
        ],
        related_case_studies: &["vietnamese-craft-villages", "nunavut-indigenous-enterprises"],
        impact: "Protects authenticity as you scale",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "auth-default",
        context: RecommendationContext::generic("culturalAuthenticity"),
        title: "Ensure Community Validation",
        description: "Establish processes to ensure your cultural practices carry \
                      recognized authenticity within source communities.",
        steps: &[
            step!("Document the cultural origins of your practices", ThisWeek),
            step!("Connect with cultural authorities in the source community", ThisMonth),
            step!("Create a validation process for cultural elements", ThisQuarter),
            step!("Maintain an ongoing relationship with cultural advisors", Ongoing),
        ],
        related_case_studies: &[],
        impact: "Critical for market differentiation and community trust",
        priority: AdvicePriority::High,
    },
    // ── IP Protection ───────────────────────────────────────────────────
    RecommendationVariant {
        id: "ip-individual",
        context: ctx!("ipProtection", orgs: &[OrganizationType::Individual]),
        title: "Protect Your Creative Work",
        description: "Start with basic protections for your designs and brand, even \
                      before you can afford comprehensive legal help.",
        steps: &[
            step!("Document all original designs with dates and photos", ThisWeek),
            step!("Add copyright notices to your website and products", ThisWeek),
            step!("Register your business name as a trademark if it is distinctive", ThisMonth),
            step!("Consult an IP attorney when budget allows", ThisQuarter),
        ],
        related_case_studies: &["palestinian-tatreez"],
        impact: "Prevents others from copying your work without credit",
        priority: AdvicePriority::Medium,
    },
    RecommendationVariant {
        id: "ip-community",
        context: ctx!("ipProtection",
            orgs: &[
                OrganizationType::Cooperative,
                OrganizationType::CommunityOrg,
                OrganizationType::IndigenousEnterprise,
                OrganizationType::CraftGuild,
            ]),
        title: "Collective IP Protection Strategy",
        description: "Develop community-wide protections including collective marks, \
                      geographical indications, and cultural protocols.",
        steps: &[
            step!("Research collective mark or geographical indication options", ThisMonth),
            step!("Document traditional designs under community ownership", ThisQuarter),
            step!("Create a licensing framework for commercial use", ThisQuarter),
            step!("Agree enforcement responsibilities and escalation paths", Ongoing),
        ],
        related_case_studies: &["moroccan-fes-pottery", "vietnamese-craft-villages"],
        impact: "Prevents exploitation and ensures fair compensation",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "ip-default",
        context: RecommendationContext::generic("ipProtection"),
        title: "Establish Legal Protections for Cultural Knowledge",
        description: "Put legal protections in place for your cultural knowledge, \
                      designs, and brand.",
        steps: &[
            step!("Inventory the knowledge and designs that need protection", ThisWeek),
            step!("Identify which protection instruments apply in your jurisdiction", ThisMonth),
            step!("File for the highest-priority protections first", ThisQuarter),
            step!("Review coverage annually as your catalog grows", Ongoing),
        ],
        related_case_studies: &[],
        impact: "Prevents exploitation and ensures fair compensation",
        priority: AdvicePriority::Medium,
    },
    // ── Community Governance ────────────────────────────────────────────
    RecommendationVariant {
        id: "gov-institution",
        context: ctx!("communityDecisionMaking",
            orgs: &[OrganizationType::CulturalInstitution, OrganizationType::Government]),
        title: "Shift Decision Rights Toward Community",
        description: "Move from consulting communities to sharing real authority over \
                      the decisions that affect their cultural heritage.",
        steps: &[
            step!("List the strategic decisions made in the last year and who made them", ThisWeek),
            step!("Select two decision types to delegate to community representatives", ThisMonth),
            step!("Formalize the delegation in governance documents", ThisQuarter),
            step!("Publish decisions and their community input trail", Ongoing),
        ],
        related_case_studies: &["nunavut-indigenous-enterprises", "mikmaq-clearwater"],
        impact: "Strong predictor of sustainable outcomes",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "gov-coop",
        context: ctx!("communityDecisionMaking",
            orgs: &[OrganizationType::Cooperative, OrganizationType::CommunityOrg]),
        title: "Strengthen Member Governance",
        description: "Make member control real in practice: accessible meetings, clear \
                      voting rules, and genuine agenda-setting power.",
        steps: &[
            step!("Survey members on barriers to participating in governance", ThisWeek),
            step!("Offer remote and asynchronous participation options", ThisMonth),
            step!("Rotate agenda-setting among member groups", ThisQuarter),
            step!("Track participation rates and report them to members", Ongoing),
        ],
        related_case_studies: &["vietnamese-craft-villages", "moroccan-fes-pottery"],
        impact: "Strong predictor of sustainable outcomes",
        priority: AdvicePriority::Medium,
    },
    RecommendationVariant {
        id: "gov-default",
        context: RecommendationContext::generic("communityDecisionMaking"),
        title: "Put Community Members in Control of Key Decisions",
        description: "Ensure community members control key strategic decisions through \
                      clear governance structures.",
        steps: &[
            step!("Map which decisions currently involve community members", ThisWeek),
            step!("Define decision rights for community representatives", ThisMonth),
            step!("Adopt the structure formally and communicate it", ThisQuarter),
            step!("Review how it works after six months", Ongoing),
        ],
        related_case_studies: &[],
        impact: "Strong predictor of sustainable outcomes",
        priority: AdvicePriority::High,
    },
    // ── Innovation Pipeline ─────────────────────────────────────────────
    RecommendationVariant {
        id: "prod-crafts",
        context: ctx!("productDevelopment",
            industries: &[Industry::Crafts, Industry::FashionTextiles]),
        title: "Create a Seasonal Collection Rhythm",
        description: "Establish a regular cycle of culturally grounded collections so new \
                      work ships on a predictable rhythm instead of ad hoc.",
        steps: &[
            step!("Pick two collection launch windows for the next year", ThisWeek),
            step!("Design the next collection around one traditional technique", ThisMonth),
            step!("Test prototypes with a small circle of customers and elders", ThisQuarter),
            step!("Retire, keep, or evolve lines based on sales and feedback", Ongoing),
        ],
        related_case_studies: &["bangladeshi-nakshi-kantha", "korean-hanji"],
        impact: "Drives economic value creation from cultural assets",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "prod-startup",
        context: ctx!("productDevelopment",
            stages: &[BusinessStage::Idea, BusinessStage::Startup]),
        title: "Ship a Minimum Viable Cultural Product",
        description: "Get one culturally grounded offering into customers' hands quickly \
                      and let real feedback shape the next iteration.",
        steps: &[
            step!("Choose the single offering closest to ready", ThisWeek),
            step!("Define what must be true culturally before it ships", ThisWeek),
            step!("Sell a small first batch to gather feedback", ThisMonth),
            step!("Fold what you learn into the next version", Ongoing),
        ],
        related_case_studies: &["palestinian-tatreez"],
        impact: "Builds an innovation habit from day one",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "prod-default",
        context: RecommendationContext::generic("productDevelopment"),
        title: "Establish a Regular Innovation Cycle",
        description: "Establish regular cycles of culturally grounded product \
                      development rather than one-off launches.",
        steps: &[
            step!("Review which past offerings worked and why", ThisWeek),
            step!("Set a realistic cadence for new releases", ThisMonth),
            step!("Create a simple stage-gate from idea to launch", ThisQuarter),
            step!("Hold a retrospective after every launch", Ongoing),
        ],
        related_case_studies: &[],
        impact: "Drives economic value creation from cultural assets",
        priority: AdvicePriority::High,
    },
    // ── Digital Distribution ────────────────────────────────────────────
    RecommendationVariant {
        id: "dig-solo",
        context: ctx!("digitalDistribution",
            orgs: &[OrganizationType::Individual],
            teams: &[TeamSize::Solo, TeamSize::TwoToFive]),
        title: "Start With One Digital Channel Done Well",
        description: "Pick the single online channel where your buyers already are and \
                      make it excellent before adding more.",
        steps: &[
            step!("Identify where your last ten customers found you", ThisWeek),
            step!("Set up or refresh that one channel with strong photography", ThisMonth),
            step!("Post process stories on a fixed weekly rhythm", Ongoing),
            step!("Review what converts and double down quarterly", ThisQuarter),
        ],
        related_case_studies: &["korean-hanji"],
        impact: "Reaches buyers far beyond your local market",
        priority: AdvicePriority::Medium,
    },
    RecommendationVariant {
        id: "dig-experience",
        context: ctx!("digitalDistribution",
            industries: &[Industry::HeritageTourism, Industry::PerformingArts]),
        title: "Build Hybrid In-Person and Digital Offerings",
        description: "Complement physical experiences with digital formats so revenue \
                      survives travel and gathering disruptions.",
        steps: &[
            step!("List which parts of your experience translate to video or livestream", ThisWeek),
            step!("Pilot one paid digital offering", ThisMonth),
            step!("Partner with a platform that handles ticketing and delivery", ThisQuarter),
            step!("Bundle digital access with in-person visits", Ongoing),
        ],
        related_case_studies: &["jamaican-cultural-industries"],
        impact: "Diversifies revenue against location-bound disruption",
        priority: AdvicePriority::Medium,
    },
    RecommendationVariant {
        id: "dig-default",
        context: RecommendationContext::generic("digitalDistribution"),
        title: "Use Digital Channels Effectively",
        description: "Build effective digital distribution for your cultural products \
                      across e-commerce, social media, and online platforms.",
        steps: &[
            step!("Audit your current digital presence", ThisWeek),
            step!("Choose one or two channels to focus on", ThisMonth),
            step!("Create a content calendar you can sustain", ThisMonth),
            step!("Measure and iterate on what sells", Ongoing),
        ],
        related_case_studies: &[],
        impact: "Reaches buyers far beyond your local market",
        priority: AdvicePriority::Medium,
    },
    // ── Intergenerational Planning ──────────────────────────────────────
    RecommendationVariant {
        id: "gen-solo",
        context: ctx!("intergenerationalPlanning",
            orgs: &[OrganizationType::Individual],
            teams: &[TeamSize::Solo, TeamSize::TwoToFive]),
        title: "Take On Your First Apprentice",
        description: "Start succession early: one apprentice learning alongside you \
                      secures both your craft and its future.",
        steps: &[
            step!("Write down what a capable successor must know", ThisWeek),
            step!("Identify one or two candidates from your community", ThisMonth),
            step!("Agree a simple apprenticeship structure and schedule", ThisQuarter),
            step!("Hand over real responsibility in stages", Ongoing),
        ],
        related_case_studies: &["korean-hanji", "palestinian-tatreez"],
        impact: "Essential for long-term sustainability",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "gen-community",
        context: ctx!("intergenerationalPlanning",
            orgs: &[
                OrganizationType::Cooperative,
                OrganizationType::IndigenousEnterprise,
                OrganizationType::CraftGuild,
            ]),
        title: "Build a Youth Training Pipeline",
        description: "Create structured pathways for young community members to learn \
                      the practice and grow into leadership.",
        steps: &[
            step!("Survey young members on interest and barriers", ThisWeek),
            step!("Design a paid training track with master practitioners", ThisMonth),
            step!("Reserve board or committee seats for younger members", ThisQuarter),
            step!("Celebrate graduations publicly to build prestige", Ongoing),
        ],
        related_case_studies: &["vietnamese-craft-villages", "moroccan-fes-pottery"],
        impact: "Essential for long-term sustainability",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "gen-default",
        context: RecommendationContext::generic("intergenerationalPlanning"),
        title: "Develop Succession and Youth Training Plans",
        description: "Develop youth training programs and succession plans so the \
                      practice outlives its current holders.",
        steps: &[
            step!("Identify which skills and roles lack successors", ThisWeek),
            step!("Draft a succession plan for the most critical role", ThisMonth),
            step!("Start one training or mentorship arrangement", ThisQuarter),
            step!("Review the plan yearly", Ongoing),
        ],
        related_case_studies: &[],
        impact: "Essential for long-term sustainability",
        priority: AdvicePriority::High,
    },
    // ── Practitioner Networks ───────────────────────────────────────────
    RecommendationVariant {
        id: "pa-forprofit",
        context: ctx!("practitionerAccess",
            orgs: &[OrganizationType::ForProfit],
            industries: &[Industry::Design, Industry::FashionTextiles]),
        title: "Partner Respectfully With Tradition Holders",
        description: "Build genuine, fairly compensated partnerships with traditional \
                      practitioners instead of transactional sourcing.",
        steps: &[
            step!("Map the practitioners whose techniques your work depends on", ThisWeek),
            step!("Open conversations about long-term collaboration", ThisMonth),
            step!("Create fair compensation and partnership frameworks", ThisQuarter),
            step!("Build long-term relationships, not just contracts", Ongoing),
        ],
        related_case_studies: &["korean-hanji", "moroccan-fes-pottery"],
        impact: "Essential for maintaining cultural integrity",
        priority: AdvicePriority::High,
    },
    RecommendationVariant {
        id: "pa-community",
        context: ctx!("practitionerAccess",
            orgs: &[
                OrganizationType::Cooperative,
                OrganizationType::CommunityOrg,
                OrganizationType::IndigenousEnterprise,
                OrganizationType::CraftGuild,
            ]),
        title: "Support Master Practitioners",
        description: "Create systems to support, honor, and learn from your master \
                      practitioners while they can still teach.",
        steps: &[
            step!("Identify master practitioners and their unique skills", ThisWeek),
            step!("Create a knowledge documentation program", ThisMonth),
            step!("Pair masters with apprentices for skill transfer", ThisQuarter),
            step!("Honor and compensate masters fairly", Ongoing),
        ],
        related_case_studies: &["vietnamese-craft-villages", "palestinian-tatreez"],
        impact: "Preserves irreplaceable traditional knowledge",
        priority: AdvicePriority::Critical,
    },
    RecommendationVariant {
        id: "pa-default",
        context: RecommendationContext::generic("practitionerAccess"),
        title: "Develop Relationships With Traditional Practitioners",
        description: "Build genuine relationships with skilled practitioners of \
                      traditional techniques.",
        steps: &[
            step!("Identify key practitioners in your tradition", ThisWeek),
            step!("Reach out respectfully to establish a connection", ThisMonth),
            step!("Create fair partnership or employment arrangements", ThisQuarter),
            step!("Maintain the relationships through regular engagement", Ongoing),
        ],
        related_case_studies: &[],
        impact: "Essential for maintaining cultural integrity",
        priority: AdvicePriority::High,
    },
];
