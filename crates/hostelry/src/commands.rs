use hostelry_access::{authorize, filter_menu, sidebar, NavItem, PermissionTable, RouteAccess, STANDARD_ROUTES};
use hostelry_common::{Config, Credentials, Identity, Role, SessionStatus};
use hostelry_session::{HttpBackend, LoginOutcome, MemoryNavigator, Navigator, SessionProvider};
use std::sync::Arc;

pub fn menu(role: Role, json: bool) -> anyhow::Result<()> {
    let items = filter_menu(sidebar(), &PermissionTable::standard().granted(Some(role)));
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print_tree(&items, 0);
    }
    Ok(())
}

pub fn routes(role: Option<Role>) -> anyhow::Result<()> {
    let table = PermissionTable::standard();
    let status = match role {
        Some(role) => SessionStatus::Authenticated(Identity::new("cli", "cli", role)),
        None => SessionStatus::Anonymous,
    };

    for entry in STANDARD_ROUTES.entries() {
        let decision = match authorize(entry, &status, &table) {
            RouteAccess::Pending => "pending",
            RouteAccess::RedirectToLogin => "redirect to login",
            RouteAccess::Hidden => "hidden",
            RouteAccess::Render => "render",
        };
        let cap = entry.capability.map(|c| c.as_str()).unwrap_or("-");
        println!("{:<42} {:<24} {}", entry.pattern, cap, decision);
    }
    Ok(())
}

pub async fn check(config: &Config) -> anyhow::Result<()> {
    let (provider, navigator) = connect(config)?;
    let status = provider.check_session().await;
    report(&provider, &navigator, &status);
    Ok(())
}

pub async fn login(config: &Config, email: String, password: String) -> anyhow::Result<()> {
    let (provider, navigator) = connect(config)?;
    provider.check_session().await;

    match provider.login(&Credentials::new(email, password)).await {
        LoginOutcome::Success => {
            report(&provider, &navigator, &provider.status());
            provider.logout().await;
            println!("signed out, now at {}", navigator.current_path());
            Ok(())
        }
        LoginOutcome::Failure { message } => anyhow::bail!("login failed: {message}"),
    }
}

fn connect(config: &Config) -> anyhow::Result<(SessionProvider, Arc<MemoryNavigator>)> {
    let backend = Arc::new(HttpBackend::new(&config.backend)?);
    let navigator = Arc::new(MemoryNavigator::new("/"));
    let provider = SessionProvider::new(backend, navigator.clone(), Arc::new(PermissionTable::standard()));
    Ok((provider, navigator))
}

fn report(provider: &SessionProvider, navigator: &MemoryNavigator, status: &SessionStatus) {
    match status.identity() {
        Some(identity) => println!("{} <{}> as {}", identity.name, identity.email, identity.role_name),
        None => println!("not signed in"),
    }
    println!("location: {}", navigator.current_path());
    print_tree(&provider.menu(sidebar()), 0);
}

fn print_tree(items: &[NavItem], depth: usize) {
    for item in items {
        match &item.target {
            Some(target) => println!("{:indent$}{} ({})", "", item.label, target, indent = depth * 2),
            None => println!("{:indent$}{}", "", item.label, indent = depth * 2),
        }
        if let Some(children) = &item.children {
            print_tree(children, depth + 1);
        }
    }
}
