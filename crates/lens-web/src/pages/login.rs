//! Login page

use crate::error::LoginError;
use crate::model::{Credentials, LoginForm};
use leptos::*;

/// Validates `form` and hands the credentials to `forward` exactly once.
/// Nothing is forwarded when a required field is empty.
pub fn submit_login<F>(form: &LoginForm, forward: F) -> Result<(), LoginError>
where
    F: FnOnce(Credentials),
{
    let credentials = form.submit()?;
    tracing::debug!(email = %credentials.email, "login form accepted");
    forward(credentials);
    Ok(())
}

/// Submit handler body: reads the field signals and runs `submit_login`.
pub fn submit_fields(
    email: ReadSignal<String>,
    password: ReadSignal<String>,
    on_submit: Callback<Credentials>,
) -> Result<(), LoginError> {
    let form = LoginForm::new(email.get_untracked(), password.get_untracked());
    submit_login(&form, |credentials| on_submit.call(credentials))
}

#[component]
pub fn LoginPage(#[prop(into)] on_submit: Callback<Credentials>) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Err(err) = submit_fields(email, password, on_submit) {
            tracing::warn!(%err, "login submission rejected");
        }
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-gray-50" data-page="login">
            <div class="w-full max-w-md p-8 space-y-6 bg-white rounded shadow-md">
                <h2 class="text-2xl font-bold text-center text-gray-800">"Connexion"</h2>
                <form on:submit=submit class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Email"</label>
                        <input
                            type="email"
                            name="email"
                            required
                            class="w-full px-3 py-2 border rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Mot de passe"</label>
                        <input
                            type="password"
                            name="password"
                            required
                            class="w-full px-3 py-2 border rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full px-4 py-2 font-semibold text-white bg-blue-600 rounded hover:bg-blue-700"
                    >
                        "Se connecter"
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_fields_never_forward() {
        for form in [
            LoginForm::new("", ""),
            LoginForm::new("", "secret"),
            LoginForm::new("jane@example.be", ""),
        ] {
            let mut forwarded = Vec::new();
            let result = submit_login(&form, |c| forwarded.push(c));
            assert!(result.is_err());
            assert!(forwarded.is_empty());
        }
    }

    #[test]
    fn test_reports_missing_password() {
        let result = submit_login(&LoginForm::new("jane@example.be", ""), |_| {});
        assert_eq!(result, Err(LoginError::MissingField(Field::Password)));
    }

    #[test]
    fn test_forwards_exactly_once_per_submit() {
        let mut forwarded = Vec::new();
        let form = LoginForm::new("jane@example.be", "secret");

        submit_login(&form, |c| forwarded.push(c)).unwrap();
        assert_eq!(
            forwarded,
            vec![Credentials {
                email: "jane@example.be".into(),
                password: "secret".into(),
            }]
        );

        submit_login(&form, |c| forwarded.push(c)).unwrap();
        assert_eq!(forwarded.len(), 2);
    }

    #[test]
    fn test_callback_receives_credentials() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let runtime = create_runtime();
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let on_submit = Callback::new(move |c: Credentials| sink.borrow_mut().push(c.email));

        submit_login(&LoginForm::new("", ""), |c| on_submit.call(c)).unwrap_err();
        submit_login(&LoginForm::new("a@b.be", "pw"), |c| on_submit.call(c)).unwrap();

        assert_eq!(*received.borrow(), vec!["a@b.be".to_string()]);
        runtime.dispose();
    }

    #[test]
    fn test_submit_fields_reads_signals() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let runtime = create_runtime();
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let on_submit = Callback::new(move |c: Credentials| sink.borrow_mut().push(c));
        let (email, set_email) = create_signal(String::new());
        let (password, set_password) = create_signal(String::new());

        assert_eq!(
            submit_fields(email, password, on_submit),
            Err(LoginError::MissingField(Field::Email))
        );
        set_email.set("jane@example.be".into());
        assert_eq!(
            submit_fields(email, password, on_submit),
            Err(LoginError::MissingField(Field::Password))
        );
        assert!(received.borrow().is_empty());

        set_password.set("secret".into());
        submit_fields(email, password, on_submit).unwrap();
        assert_eq!(
            *received.borrow(),
            vec![Credentials {
                email: "jane@example.be".into(),
                password: "secret".into(),
            }]
        );
        runtime.dispose();
    }
}
