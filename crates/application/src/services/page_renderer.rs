use iplookup_domain::{DashboardPage, DomainError, QueryRecord};

const QUERIES_SECTION: &str = "queries";

/// Renders the dashboard template.
///
/// Supported tags:
/// - `{{build}}`, `{{count}}` anywhere
/// - `{{#queries}}...{{/queries}}` repeated once per record, with
///   `{{domain}}`, `{{ips}}` and `{{recorded_at}}` available inside
/// - `{{^queries}}...{{/queries}}` rendered only when the log is empty
///
/// The whole template is checked before anything is rendered, so an
/// invalid template fails the same way whatever the log holds. Every
/// substituted value is HTML-escaped.
pub struct PageRenderer;

impl PageRenderer {
    pub fn render(template: &str, page: &DashboardPage) -> Result<String, DomainError> {
        let tokens = tokenize(template)?;
        let mut tokens = tokens.into_iter();
        let nodes = parse(&mut tokens, None)?;

        let mut out = String::with_capacity(template.len() + page.query_count() * 128);
        render_nodes(&nodes, page, None, &mut out);
        Ok(out)
    }
}

enum Token<'a> {
    Text(&'a str),
    Var(&'a str),
    Section(&'a str),
    Inverted(&'a str),
    Close(&'a str),
}

/// Placeholder resolved at parse time. The record fields are only ever
/// produced inside a `{{#queries}}` body.
#[derive(Clone, Copy)]
enum Field {
    Build,
    Count,
    Domain,
    Ips,
    RecordedAt,
}

impl Field {
    fn is_record_field(self) -> bool {
        matches!(self, Field::Domain | Field::Ips | Field::RecordedAt)
    }
}

enum Node<'a> {
    Text(&'a str),
    Var(Field),
    Section { inverted: bool, body: Vec<Node<'a>> },
}

/// Section currently being parsed.
#[derive(Clone, Copy)]
struct Open<'a> {
    name: &'a str,
    inverted: bool,
}

fn render_error(message: String) -> DomainError {
    DomainError::TemplateRender(message)
}

fn tokenize(template: &str) -> Result<Vec<Token<'_>>, DomainError> {
    let mut tokens = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find("{{") {
        if start > 0 {
            tokens.push(Token::Text(&rest[..start]));
        }

        let after = &rest[start + 2..];
        let end = after.find("}}").ok_or_else(|| {
            render_error(format!("unterminated tag at byte {}", offset + start))
        })?;

        let tag = after[..end].trim();
        let token = match tag.as_bytes().first() {
            Some(b'#') => Token::Section(tag[1..].trim()),
            Some(b'^') => Token::Inverted(tag[1..].trim()),
            Some(b'/') => Token::Close(tag[1..].trim()),
            Some(_) => Token::Var(tag),
            None => {
                return Err(render_error(format!(
                    "empty tag at byte {}",
                    offset + start
                )))
            }
        };
        tokens.push(token);

        let consumed = start + 2 + end + 2;
        offset += consumed;
        rest = &rest[consumed..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }

    Ok(tokens)
}

fn parse<'a, I>(tokens: &mut I, open: Option<Open<'a>>) -> Result<Vec<Node<'a>>, DomainError>
where
    I: Iterator<Item = Token<'a>>,
{
    let mut nodes = Vec::new();

    while let Some(token) = tokens.next() {
        match token {
            Token::Text(text) => nodes.push(Node::Text(text)),
            Token::Var(name) => nodes.push(Node::Var(resolve_field(name, open)?)),
            Token::Section(name) | Token::Inverted(name) if name != QUERIES_SECTION => {
                return Err(render_error(format!("unknown section '{name}'")));
            }
            Token::Section(name) | Token::Inverted(name) if open.is_some() => {
                return Err(render_error(format!("section '{name}' cannot be nested")));
            }
            Token::Section(name) => {
                let body = parse(tokens, Some(Open { name, inverted: false }))?;
                nodes.push(Node::Section {
                    inverted: false,
                    body,
                });
            }
            Token::Inverted(name) => {
                let body = parse(tokens, Some(Open { name, inverted: true }))?;
                nodes.push(Node::Section {
                    inverted: true,
                    body,
                });
            }
            Token::Close(name) => {
                return match open {
                    Some(expected) if expected.name == name => Ok(nodes),
                    Some(expected) => Err(render_error(format!(
                        "section '{}' closed by '{name}'",
                        expected.name
                    ))),
                    None => Err(render_error(format!("unexpected close of '{name}'"))),
                };
            }
        }
    }

    match open {
        Some(open) => Err(render_error(format!(
            "section '{}' is never closed",
            open.name
        ))),
        None => Ok(nodes),
    }
}

fn resolve_field(name: &str, open: Option<Open<'_>>) -> Result<Field, DomainError> {
    let field = match name {
        "build" => Field::Build,
        "count" => Field::Count,
        "domain" => Field::Domain,
        "ips" => Field::Ips,
        "recorded_at" => Field::RecordedAt,
        other => return Err(render_error(format!("unknown placeholder '{other}'"))),
    };

    let in_records = matches!(open, Some(Open { inverted: false, .. }));
    if field.is_record_field() && !in_records {
        return Err(render_error(format!(
            "unknown placeholder '{name}' outside {{{{#{QUERIES_SECTION}}}}}"
        )));
    }
    Ok(field)
}

fn render_nodes(
    nodes: &[Node<'_>],
    page: &DashboardPage,
    record: Option<&QueryRecord>,
    out: &mut String,
) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Var(field) => escape_html_into(&value(*field, page, record), out),
            Node::Section { inverted, body } => {
                if *inverted {
                    if page.queries.is_empty() {
                        render_nodes(body, page, None, out);
                    }
                } else {
                    for query in &page.queries {
                        render_nodes(body, page, Some(query), out);
                    }
                }
            }
        }
    }
}

fn value(field: Field, page: &DashboardPage, record: Option<&QueryRecord>) -> String {
    match (field, record) {
        (Field::Build, _) => page.build.to_string(),
        (Field::Count, _) => page.query_count().to_string(),
        (Field::Domain, Some(record)) => record.domain.to_string(),
        (Field::Ips, Some(record)) => record.joined_addresses(", "),
        (Field::RecordedAt, Some(record)) => record.recorded_at.to_rfc3339(),
        // Record fields are rejected outside the repeated section by `parse`.
        (_, None) => String::new(),
    }
}

fn escape_html_into(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}
