/// Print documentation for every constraint a rule's `type` field can name.
pub fn print_rules_documentation() {
    println!("{}", rules_documentation());
}

fn rules_documentation() -> String {
    format!(
        r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                        DATAGUARD VALIDATION RULES                            ║
╚══════════════════════════════════════════════════════════════════════════════╝
{}
{}
{}
{}
"#,
        null_handling_section(),
        generic_rules_section(),
        string_rules_section(),
        numeric_rules_section()
    )
}

fn null_handling_section() -> String {
    r#"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
 NULL HANDLING POLICY
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
PRINCIPLE:
  Domain rules validate domain constraints. Null checking validates existence.
BEHAVIOR:
  • Domain rules (between, contains, matches_regex, length_between, ...):
    → Skip null values - only non-null cells count toward failed_count.
  • not_null:
    → Counts every null cell as a failure.
  • unique:
    → Ignores nulls entirely (multiple nulls never count as duplicates).
EXAMPLE:
  • between(0, 100) against [50, null, 75, null, 90]:
    → failed_count = 0 (nulls are skipped, not failures)
"#
    .to_string()
}

fn generic_rules_section() -> String {
    r#"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
 GENERIC RULES (any column kind)
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
┌─────────────────────────────────────────────────────────────────────────────┐
│ not_null                                                                     │
├─────────────────────────────────────────────────────────────────────────────┤
│ Description: requires every cell to be non-null.                            │
│ failed_count: number of null cells.                                         │
│                                                                              │
│   [[table.rule]]                                                            │
│   column_name = "id"                                                        │
│   type = "not_null"                                                         │
└─────────────────────────────────────────────────────────────────────────────┘
┌─────────────────────────────────────────────────────────────────────────────┐
│ unique                                                                       │
├─────────────────────────────────────────────────────────────────────────────┤
│ Description: requires every non-null value to occur exactly once.           │
│ failed_count: number of duplicate occurrences (nulls ignored).              │
│                                                                              │
│   [[table.rule]]                                                            │
│   column_name = "id"                                                        │
│   type = "unique"                                                           │
└─────────────────────────────────────────────────────────────────────────────┘
┌─────────────────────────────────────────────────────────────────────────────┐
│ is_in                                                                        │
├─────────────────────────────────────────────────────────────────────────────┤
│ Description: value must be one of a fixed set of scalars. Integer, Float,   │
│ and String columns only.                                                     │
│                                                                              │
│   [[table.rule]]                                                            │
│   column_name = "status"                                                    │
│   type = "is_in"                                                            │
│   values = ["pending", "approved"]                                          │
└─────────────────────────────────────────────────────────────────────────────┘
"#
    .to_string()
}

fn string_rules_section() -> String {
    r#"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
 STRING RULES
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
┌─────────────────────────────────────────────────────────────────────────────┐
│ contains / starts_with / ends_with                                          │
├─────────────────────────────────────────────────────────────────────────────┤
│ Description: exact case-sensitive substring / prefix / suffix match.        │
│                                                                              │
│   [[table.rule]]                                                            │
│   column_name = "email"                                                     │
│   type = "contains"                                                         │
│   s = "@"                                                                    │
└─────────────────────────────────────────────────────────────────────────────┘
┌─────────────────────────────────────────────────────────────────────────────┐
│ matches_regex                                                               │
├─────────────────────────────────────────────────────────────────────────────┤
│ Description: partial match against an unanchored regex (anchor with ^/$    │
│ yourself for a full match). Invalid patterns fail only that rule's result.  │
│                                                                              │
│   [[table.rule]]                                                            │
│   column_name = "code"                                                      │
│   type = "matches_regex"                                                    │
│   pattern = "^[A-Z]{2}[0-9]{4}$"                                            │
└─────────────────────────────────────────────────────────────────────────────┘
┌─────────────────────────────────────────────────────────────────────────────┐
│ length_between                                                              │
├─────────────────────────────────────────────────────────────────────────────┤
│ Description: Unicode scalar length must fall in [min, max] (inclusive).     │
│                                                                              │
│   [[table.rule]]                                                            │
│   column_name = "name"                                                      │
│   type = "length_between"                                                   │
│   min = 1                                                                    │
│   max = 50                                                                   │
└─────────────────────────────────────────────────────────────────────────────┘
"#
    .to_string()
}

fn numeric_rules_section() -> String {
    r#"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
 NUMERIC RULES (Integer & Float)
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
┌─────────────────────────────────────────────────────────────────────────────┐
│ gt / ge / lt / le / equal                                                    │
├─────────────────────────────────────────────────────────────────────────────┤
│ Description: comparison against a scalar `x`. Integer cells widen to f64.   │
│                                                                              │
│   [[table.rule]]                                                            │
│   column_name = "age"                                                       │
│   type = "gt"                                                               │
│   x = 0.0                                                                    │
└─────────────────────────────────────────────────────────────────────────────┘
┌─────────────────────────────────────────────────────────────────────────────┐
│ between                                                                      │
├─────────────────────────────────────────────────────────────────────────────┤
│ Description: value must be in [min, max] (inclusive).                       │
│                                                                              │
│   [[table.rule]]                                                            │
│   column_name = "score"                                                     │
│   type = "between"                                                          │
│   min = 0.0                                                                 │
│   max = 100.0                                                               │
└─────────────────────────────────────────────────────────────────────────────┘
"#
    .to_string()
}
