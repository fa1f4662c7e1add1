pub trait SecretsProvider {
    fn get_consumer_key_pair<'a>(&'a self) -> (&'a str, &'a str);

    fn get_token_pair_option<'a>(&'a self) -> Option<(&'a str, &'a str)>;

    fn get_token_option_pair<'a>(&'a self) -> (Option<&'a str>, Option<&'a str>) {
        self.get_token_pair_option()
            .map(|s| (Some(s.0), Some(s.1)))
            .unwrap_or_else(|| (None, None))
    }
}

/// Borrowed view over the credentials a request is signed with.
#[derive(Debug, Clone, Copy)]
pub struct Secrets<'a> {
    consumer_key: &'a str,
    consumer_secret: &'a str,
    token: Option<(&'a str, &'a str)>,
}

impl<'a> Secrets<'a> {
    pub fn new(consumer_key: &'a str, consumer_secret: &'a str) -> Self {
        Secrets {
            consumer_key,
            consumer_secret,
            token: None,
        }
    }

    pub fn token(self, token: &'a str, token_secret: &'a str) -> Self {
        Secrets {
            token: Some((token, token_secret)),
            ..self
        }
    }
}

impl SecretsProvider for Secrets<'_> {
    fn get_consumer_key_pair<'a>(&'a self) -> (&'a str, &'a str) {
        (self.consumer_key, self.consumer_secret)
    }

    fn get_token_pair_option<'a>(&'a self) -> Option<(&'a str, &'a str)> {
        self.token
    }
}
