use crate::catalog::{Area, Catalog, Course};

/// The `/start` message, also re-sent after the delete form finishes.
pub fn help_text() -> &'static str {
    "👋 Olá! Eu sou o bot de cursos. Comandos disponíveis:\n\
     /adicionar_curso - Adicionar um novo curso\n\
     /listar_cursos - Listar todos os cursos\n\
     /curso <nome> - Consultar o link de um curso\n\
     /editar_curso - Editar um curso\n\
     /apagar_curso - Apagar um curso\n\
     /cancelar - Cancelar a operação"
}

/// Render the catalog grouped by area, areas in first-seen iteration order,
/// course names bulleted under each.
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut groups: Vec<(Area, Vec<&str>)> = Vec::new();
    for (name, course) in catalog {
        match groups.iter_mut().find(|(area, _)| *area == course.area) {
            Some((_, names)) => names.push(name.as_str()),
            None => groups.push((course.area, vec![name.as_str()])),
        }
    }

    let mut msg = String::from("📚 Cursos disponíveis:\n");
    for (area, names) in &groups {
        msg.push_str(&format!("\n🔸 {}:\n", area.label()));
        for name in names {
            msg.push_str(&format!("  - {name}\n"));
        }
    }
    msg.push_str("\nPara consultar o link, use: /curso <nome do curso>");
    msg
}

/// Single-course lookup reply.
pub fn render_course(name: &str, course: &Course) -> String {
    format!("🔗 Link do curso '{}': {}", name, course.link)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(area: Area, link: &str) -> Course {
        Course {
            area,
            link: link.to_string(),
        }
    }

    #[test]
    fn render_catalog_groups_names_by_area() {
        let mut catalog = Catalog::new();
        catalog.insert("Calculo 1".to_string(), course(Area::Matematica, "http://c1"));
        catalog.insert("Historia".to_string(), course(Area::Humanas, "http://h"));
        catalog.insert("Algebra".to_string(), course(Area::Matematica, "http://a"));

        let out = render_catalog(&catalog);

        assert!(out.contains("🔸 Matematica:"));
        assert!(out.contains("🔸 Humanas:"));
        assert!(!out.contains("🔸 Redacao:"));
        assert!(out.contains("  - Calculo 1\n"));
        assert!(out.contains("  - Algebra\n"));
        assert!(out.contains("  - Historia\n"));

        // "Algebra" iterates first, so Matematica is the first-seen group.
        let mat = out.find("🔸 Matematica:").unwrap();
        let hum = out.find("🔸 Humanas:").unwrap();
        let calc = out.find("- Calculo 1").unwrap();
        assert!(mat < hum);
        assert!(mat < calc && calc < hum, "Calculo 1 sits inside the Matematica group");
    }

    #[test]
    fn render_course_contains_name_and_link() {
        let out = render_course("A", &course(Area::Humanas, "l1"));
        assert!(out.contains("'A'"));
        assert!(out.contains("l1"));
    }
}
