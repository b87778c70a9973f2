//! Deserialization of the JSON configuration documents.
//!
//! Both documents are walked manually from `serde_json::Value` so that
//! every shape problem is reported with its location in the document,
//! and so that conditions can be parsed into [`Condition`] structures
//! during the load rather than at evaluation time.
//!
//! Ordered sections (`quick_selection.keywords`, `modifications`,
//! `elif` maps) rely on serde_json's `preserve_order` feature: JSON
//! object entries are kept in document order.

use serde_json::Value;

use crate::condition::Condition;
use crate::error::ConfigError;
use crate::model::*;

/// Step the questionnaire starts from when the document does not name
/// one explicitly.
pub const DEFAULT_ENTRY_STEP: &str = "step_1_product_type";

/// Built-in scenario modifications, used when the logic document has no
/// `modifications` section. Matches the historically hardcoded pairs.
fn default_modifications() -> Vec<(String, Modification)> {
    vec![
        (
            "seasonal".to_string(),
            Modification {
                kind: "design".to_string(),
                description: "Apply a seasonal color scheme".to_string(),
                items: vec![
                    "color_scheme".to_string(),
                    "seasonal_imagery".to_string(),
                    "lifestyle_photos".to_string(),
                ],
            },
        ),
        (
            "limited_offer".to_string(),
            Modification {
                kind: "urgency".to_string(),
                description: "Add urgency elements".to_string(),
                items: vec![
                    "countdown_timer".to_string(),
                    "stock_counter".to_string(),
                    "purchase_counter".to_string(),
                ],
            },
        ),
    ]
}

impl TemplateCatalog {
    /// Deserialize a template catalog document.
    ///
    /// Expected shape: `{ "templates": { "<id>": { "name": ..,
    /// "description"?: .. } } }`.
    pub fn from_json(doc: &Value) -> Result<TemplateCatalog, ConfigError> {
        let root = doc.as_object().ok_or(ConfigError::NotAnObject)?;
        let templates_val = root
            .get("templates")
            .ok_or_else(|| ConfigError::malformed("catalog", "missing 'templates' object"))?;
        let templates_obj = templates_val
            .as_object()
            .ok_or_else(|| ConfigError::malformed("catalog.templates", "must be an object"))?;

        let mut templates = std::collections::BTreeMap::new();
        for (id, info) in templates_obj {
            let ctx = format!("templates.{}", id);
            let name = get_str(info, "name", &ctx)?;
            let description = get_opt_str(info, "description", &ctx)?;
            templates.insert(id.clone(), TemplateInfo { name, description });
        }
        Ok(TemplateCatalog { templates })
    }
}

impl SelectionLogic {
    /// Deserialize a selection-logic document: decision tree, rules,
    /// compatibility matrix, quick-select keywords, modifications.
    pub fn from_json(doc: &Value) -> Result<SelectionLogic, ConfigError> {
        let root = doc.as_object().ok_or(ConfigError::NotAnObject)?;

        let tree = parse_tree(
            root.get("decision_tree")
                .ok_or_else(|| ConfigError::malformed("logic", "missing 'decision_tree'"))?,
            root.get("entry_step").and_then(Value::as_str),
        )?;

        let rules = match root.get("template_selection") {
            Some(ts) => parse_rules(ts)?,
            None => Vec::new(),
        };

        let compatibility = match root.get("compatibility_matrix") {
            Some(cm) => parse_matrix(cm)?,
            None => CompatibilityMatrix::default(),
        };

        let quick_keywords = match root.get("quick_selection") {
            Some(qs) => parse_keywords(qs)?,
            None => Vec::new(),
        };

        let modifications = match root.get("modifications") {
            Some(m) => parse_modifications(m)?,
            None => default_modifications(),
        };

        Ok(SelectionLogic {
            tree,
            rules,
            compatibility,
            quick_keywords,
            modifications,
        })
    }
}

// ──────────────────────────────────────────────
// Decision tree
// ──────────────────────────────────────────────

fn parse_tree(v: &Value, entry: Option<&str>) -> Result<DecisionTree, ConfigError> {
    let obj = v
        .as_object()
        .ok_or_else(|| ConfigError::malformed("decision_tree", "must be an object"))?;

    let mut steps = std::collections::BTreeMap::new();
    for (step_id, node) in obj {
        let ctx = format!("decision_tree.{}", step_id);
        let step = match node.get("condition") {
            Some(cond) => Step::Branch(parse_branch(cond, &ctx)?),
            None => Step::Question(parse_question(node, &ctx)?),
        };
        steps.insert(step_id.clone(), step);
    }

    Ok(DecisionTree {
        steps,
        entry: entry.unwrap_or(DEFAULT_ENTRY_STEP).to_string(),
    })
}

fn parse_question(v: &Value, ctx: &str) -> Result<QuestionNode, ConfigError> {
    Ok(QuestionNode {
        question: get_str(v, "question", ctx)?,
        options: parse_options(v, ctx)?,
        next_step: get_opt_str(v, "next_step", ctx)?,
        multi_select: v
            .get("multi_select")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

fn parse_branch(v: &Value, ctx: &str) -> Result<BranchNode, ConfigError> {
    let obj = v
        .as_object()
        .ok_or_else(|| ConfigError::malformed(ctx, "'condition' must be an object"))?;

    let mut arms = Vec::new();

    // Leading `if`/`then` pair.
    if let Some(expr) = obj.get("if") {
        let expr = expr
            .as_str()
            .ok_or_else(|| ConfigError::malformed(ctx, "'if' must be a string"))?;
        let then = obj
            .get("then")
            .ok_or_else(|| ConfigError::malformed(ctx, "'if' without 'then'"))?;
        arms.push(BranchArm {
            condition: Condition::parse(expr),
            outcome: parse_outcome(then, ctx)?,
        });
    }

    // `elif` is an expression -> outcome map, evaluated in document
    // order after the leading `if`.
    if let Some(elifs) = obj.get("elif") {
        let elif_obj = elifs
            .as_object()
            .ok_or_else(|| ConfigError::malformed(ctx, "'elif' must be an object"))?;
        for (expr, then) in elif_obj {
            arms.push(BranchArm {
                condition: Condition::parse(expr),
                outcome: parse_outcome(then, ctx)?,
            });
        }
    }

    // The fallback target is mandatory and explicit. A branch with no
    // matching arm and no fallback would re-enter itself forever.
    let fallback = get_str(v, "next_step", ctx).map_err(|_| {
        ConfigError::malformed(ctx, "branch requires an explicit fallback 'next_step'")
    })?;

    Ok(BranchNode { arms, fallback })
}

fn parse_outcome(v: &Value, ctx: &str) -> Result<Outcome, ConfigError> {
    Ok(Outcome {
        question: get_str(v, "question", ctx)?,
        options: parse_options(v, ctx)?,
        next_step: get_opt_str(v, "next_step", ctx)?,
        template_suggestion: get_opt_str(v, "template_suggestion", ctx)?,
    })
}

fn parse_options(v: &Value, ctx: &str) -> Result<Vec<ChoiceOption>, ConfigError> {
    let arr = v
        .get("options")
        .and_then(Value::as_array)
        .ok_or_else(|| ConfigError::malformed(ctx, "missing 'options' array"))?;

    let mut options = Vec::with_capacity(arr.len());
    for opt in arr {
        options.push(ChoiceOption {
            id: get_str(opt, "id", ctx)?,
            label: get_str(opt, "label", ctx)?,
        });
    }
    Ok(options)
}

// ──────────────────────────────────────────────
// Selection rules
// ──────────────────────────────────────────────

fn parse_rules(v: &Value) -> Result<Vec<SelectionRule>, ConfigError> {
    let arr = v
        .get("rules")
        .and_then(Value::as_array)
        .ok_or_else(|| ConfigError::malformed("template_selection", "missing 'rules' array"))?;

    let mut rules = Vec::with_capacity(arr.len());
    for (i, rule) in arr.iter().enumerate() {
        let ctx = format!("template_selection.rules[{}]", i);

        let conditions_obj = rule
            .get("conditions")
            .and_then(Value::as_object)
            .ok_or_else(|| ConfigError::malformed(&ctx, "missing 'conditions' object"))?;

        let mut conditions = Vec::with_capacity(conditions_obj.len());
        for (field, required) in conditions_obj {
            let value = match required {
                Value::String(s) => RuleValue::One(s.clone()),
                Value::Array(items) => {
                    let mut set = Vec::with_capacity(items.len());
                    for item in items {
                        let s = item.as_str().ok_or_else(|| {
                            ConfigError::malformed(
                                &ctx,
                                format!("condition '{}' has a non-string set member", field),
                            )
                        })?;
                        set.push(s.to_string());
                    }
                    RuleValue::Any(set)
                }
                _ => {
                    return Err(ConfigError::malformed(
                        &ctx,
                        format!("condition '{}' must be a string or array", field),
                    ))
                }
            };
            conditions.push((field.clone(), value));
        }

        rules.push(SelectionRule {
            priority: rule
                .get("priority")
                .and_then(Value::as_u64)
                .unwrap_or(999) as u32,
            conditions,
            template: get_str(rule, "template", &ctx)?,
            reason: get_str(rule, "reason", &ctx)?,
            override_flag: rule
                .get("override")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        });
    }
    Ok(rules)
}

// ──────────────────────────────────────────────
// Matrix, keywords, modifications
// ──────────────────────────────────────────────

fn parse_matrix(v: &Value) -> Result<CompatibilityMatrix, ConfigError> {
    let obj = v
        .get("matrix")
        .and_then(Value::as_object)
        .ok_or_else(|| ConfigError::malformed("compatibility_matrix", "missing 'matrix' object"))?;

    let mut entries = std::collections::BTreeMap::new();
    for (template, entry) in obj {
        let ctx = format!("compatibility_matrix.matrix.{}", template);
        let not_compatible_with = match entry.get("not_compatible_with") {
            Some(list) => str_vec(list, &ctx)?,
            None => Vec::new(),
        };
        entries.insert(
            template.clone(),
            CompatEntry {
                not_compatible_with,
            },
        );
    }
    Ok(CompatibilityMatrix { entries })
}

fn parse_keywords(v: &Value) -> Result<Vec<(String, Vec<String>)>, ConfigError> {
    let obj = v
        .get("keywords")
        .and_then(Value::as_object)
        .ok_or_else(|| ConfigError::malformed("quick_selection", "missing 'keywords' object"))?;

    let mut keywords = Vec::with_capacity(obj.len());
    for (template, list) in obj {
        let ctx = format!("quick_selection.keywords.{}", template);
        keywords.push((template.clone(), str_vec(list, &ctx)?));
    }
    Ok(keywords)
}

fn parse_modifications(v: &Value) -> Result<Vec<(String, Modification)>, ConfigError> {
    let obj = v
        .as_object()
        .ok_or_else(|| ConfigError::malformed("modifications", "must be an object"))?;

    let mut mods = Vec::with_capacity(obj.len());
    for (scenario, spec) in obj {
        let ctx = format!("modifications.{}", scenario);
        mods.push((
            scenario.clone(),
            Modification {
                kind: get_str(spec, "type", &ctx)?,
                description: get_str(spec, "description", &ctx)?,
                items: match spec.get("items") {
                    Some(list) => str_vec(list, &ctx)?,
                    None => Vec::new(),
                },
            },
        ));
    }
    Ok(mods)
}

// ──────────────────────────────────────────────
// JSON access helpers
// ──────────────────────────────────────────────

fn get_str(v: &Value, field: &str, ctx: &str) -> Result<String, ConfigError> {
    v.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ConfigError::malformed(ctx, format!("missing string field '{}'", field)))
}

fn get_opt_str(v: &Value, field: &str, ctx: &str) -> Result<Option<String>, ConfigError> {
    match v.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ConfigError::malformed(
            ctx,
            format!("field '{}' must be a string", field),
        )),
    }
}

fn str_vec(v: &Value, ctx: &str) -> Result<Vec<String>, ConfigError> {
    let arr = v
        .as_array()
        .ok_or_else(|| ConfigError::malformed(ctx, "expected an array of strings"))?;
    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        let s = item
            .as_str()
            .ok_or_else(|| ConfigError::malformed(ctx, "expected an array of strings"))?;
        out.push(s.to_string());
    }
    Ok(out)
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
