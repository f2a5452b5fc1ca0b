pub(crate) mod https_redirect;
