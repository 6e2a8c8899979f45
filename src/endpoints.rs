#[derive(Debug, Clone)]
pub struct Endpoint {
	pub path: String,
	pub params: Vec<(String, String)>,
}

impl Endpoint {
	pub fn new(path: &str, params: &[(&str, &str)]) -> Self {
		Self {
			path: path.into(),
			params: params.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
		}
	}
}

/// The fixed checklist, in the order it is reported.
pub fn checklist() -> Vec<Endpoint> {
	vec![
		Endpoint::new("/api/top-tracks", &[("amount", "10"), ("timeRange", "long_term")]),
		Endpoint::new("/api/top-artists", &[("amount", "10"), ("timeRange", "long_term")]),
		Endpoint::new("/api/top-genres", &[("amount", "10"), ("timeRange", "long_term")]),
		Endpoint::new("/api/user", &[]),
	]
}
