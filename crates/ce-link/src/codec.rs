use ce_core::{PointRole, Real, ensure_finite};
use url::Url;

use crate::error::{LinkError, LinkResult};

/// The four fields decoded from a link. `None` means absent or non-numeric.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinkValues {
    fields: [Option<Real>; 4],
}

impl LinkValues {
    pub fn new(fields: [Option<Real>; 4]) -> Self {
        Self { fields }
    }

    pub fn get(&self, role: PointRole) -> Option<Real> {
        self.fields[role.index()]
    }

    pub fn fields(&self) -> [Option<Real>; 4] {
        self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(Option::is_none)
    }

    /// Fill absent fields from `defaults`, indexed by role.
    pub fn or(&self, defaults: [Real; 4]) -> [Real; 4] {
        std::array::from_fn(|i| self.fields[i].unwrap_or(defaults[i]))
    }

    /// Fill absent fields with each role's documented default
    /// (p0=75, p1=50, p2=90, p3=25).
    pub fn or_role_defaults(&self) -> [Real; 4] {
        self.or(PointRole::ALL.map(PointRole::default_value))
    }
}

/// Build a link for `values` on top of the base location `base`.
pub fn encode(base: &str, values: [Real; 4]) -> LinkResult<Url> {
    let base_url = Url::parse(base).map_err(|source| LinkError::InvalidBase {
        base: base.to_string(),
        source,
    })?;
    encode_url(&base_url, values)
}

/// Build a link for `values` on top of an already parsed base location.
///
/// Only the base's origin is kept when it has one: path, query and fragment
/// of the current location are dropped.
pub fn encode_url(base: &Url, values: [Real; 4]) -> LinkResult<Url> {
    if base.cannot_be_a_base() {
        return Err(LinkError::CannotBeABase {
            base: base.to_string(),
        });
    }
    for (role, value) in PointRole::ALL.iter().zip(values) {
        ensure_finite(value, role.name())?;
    }

    let mut url = base.clone();
    url.set_fragment(None);
    url.set_query(None);
    if url.has_host() {
        url.set_path("/");
    }
    {
        let mut query = url.query_pairs_mut();
        for role in PointRole::ALL {
            query.append_pair(role.name(), &values[role.index()].to_string());
        }
    }
    Ok(url)
}

/// Extract the four fields from an incoming link.
///
/// Accepts an absolute URL or a bare query string (`?p0=1&p1=2`,
/// `p0=1&p1=2`). Anything else decodes to all-absent.
pub fn decode(link: &str) -> LinkValues {
    let link = link.trim();
    if link.is_empty() {
        return LinkValues::default();
    }
    match Url::parse(link) {
        Ok(url) => decode_url(&url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let query = link.strip_prefix('?').unwrap_or(link);
            decode_pairs(url::form_urlencoded::parse(query.as_bytes()))
        }
        Err(err) => {
            tracing::warn!(%err, link, "ignoring unparsable link");
            LinkValues::default()
        }
    }
}

/// Extract the four fields from a parsed URL's query.
pub fn decode_url(url: &Url) -> LinkValues {
    decode_pairs(url.query_pairs())
}

fn decode_pairs<'a, I>(pairs: I) -> LinkValues
where
    I: Iterator<Item = (std::borrow::Cow<'a, str>, std::borrow::Cow<'a, str>)>,
{
    let mut seen = [false; 4];
    let mut fields = [None; 4];
    for (name, raw) in pairs {
        let Ok(role) = name.parse::<PointRole>() else {
            continue;
        };
        // First occurrence wins, like URLSearchParams::get.
        let i = role.index();
        if seen[i] {
            continue;
        }
        seen[i] = true;
        fields[i] = parse_field(&raw);
    }
    LinkValues::new(fields)
}

/// Read the leading decimal number of a field, ignoring anything after it
/// (`12px` reads as 12). Fields without one, or whose number is not finite,
/// are absent.
fn parse_field(raw: &str) -> Option<Real> {
    numeric_prefix(raw.trim_start())
        .parse::<Real>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Longest prefix of `raw` forming a decimal literal: optional sign, digits
/// with an optional fraction, then an exponent if it has digits.
fn numeric_prefix(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int = digits(end);
    end += int;
    let mut frac = 0;
    if bytes.get(end) == Some(&b'.') {
        frac = digits(end + 1);
        if int + frac > 0 {
            end += 1 + frac;
        }
    }
    if int + frac == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let count = digits(exp);
        if count > 0 {
            end = exp + count;
        }
    }
    &raw[..end]
}
