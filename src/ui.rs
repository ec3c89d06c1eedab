pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Ranking Quiz</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4f1ea;
      --bg-2: #cfe3f5;
      --ink: #26323a;
      --accent: #3577c2;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e8f0f9 60%, #f2f5f0 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(640px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f6b72;
      font-size: 1rem;
    }

    .category-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .category-card .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7f8a91;
    }

    .category-card .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    #sortable-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .sortable-item {
      display: flex;
      align-items: center;
      gap: 14px;
      background: white;
      border-radius: 14px;
      padding: 14px 16px;
      border: 1px solid rgba(47, 72, 88, 0.1);
      cursor: grab;
      user-select: none;
    }

    .sortable-item .rank-number {
      width: 28px;
      height: 28px;
      border-radius: 50%;
      background: var(--accent);
      color: white;
      font-weight: 600;
      display: grid;
      place-items: center;
      flex-shrink: 0;
    }

    .sortable-item .item-text {
      flex: 1;
      font-size: 1.05rem;
    }

    .sortable-item .drag-handle {
      color: #a0aab0;
    }

    .sortable-ghost {
      opacity: 0.4;
    }

    .sortable-chosen {
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.18);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(53, 119, 194, 0.3);
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      background: #9fb4c6;
      box-shadow: none;
      cursor: not-allowed;
    }

    .message {
      font-size: 0.95rem;
      color: #5f6b72;
      min-height: 1.2em;
    }

    .message.error {
      color: #c63b2b;
    }

    .message.success {
      color: #2d7a4b;
    }

    .message.info {
      color: var(--accent-2);
    }

    .hidden {
      display: none;
    }

    .hint {
      margin: 0;
      color: #6f7a80;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Ranking Quiz</h1>
      <p class="subtitle" id="current-date">{{DATE}}</p>
    </header>

    <section class="category-card">
      <span class="label">Rank today's list</span>
      <span class="value" id="quiz-category">Loading...</span>
    </section>

    <ul id="sortable-list"></ul>

    <button id="submit-btn" type="button">Submit my ranking</button>
    <div id="loading" class="message hidden">Submitting...</div>
    <div id="message" class="message"></div>
    <p class="hint">Drag items into your order, best at the top. One submission per day.</p>
  </main>

  <script src="https://cdn.jsdelivr.net/npm/sortablejs@1.15.0/Sortable.min.js"></script>
  <script>
    const categoryEl = document.getElementById('quiz-category');
    const listEl = document.getElementById('sortable-list');
    const submitBtn = document.getElementById('submit-btn');
    const loadingEl = document.getElementById('loading');
    const messageEl = document.getElementById('message');

    const SESSION_KEY = 'quiz-session-id';

    const showMessage = (text, type) => {
      messageEl.textContent = text;
      messageEl.className = `message ${type || ''}`;
      if (type === 'error') {
        setTimeout(() => {
          messageEl.className = 'message';
          messageEl.textContent = '';
        }, 5000);
      }
    };

    const ensureSession = async () => {
      let sessionId = localStorage.getItem(SESSION_KEY);
      if (!sessionId) {
        const res = await fetch('/api/session', { method: 'POST' });
        if (!res.ok) {
          throw new Error('Unable to start a session');
        }
        sessionId = (await res.json()).session_id;
        localStorage.setItem(SESSION_KEY, sessionId);
      }
      return sessionId;
    };

    const updateRankNumbers = () => {
      listEl.querySelectorAll('.sortable-item').forEach((item, index) => {
        item.querySelector('.rank-number').textContent = index + 1;
      });
    };

    const renderItems = (items) => {
      listEl.innerHTML = '';
      items.forEach((item, index) => {
        const li = document.createElement('li');
        li.className = 'sortable-item';
        li.dataset.item = item;

        const rank = document.createElement('span');
        rank.className = 'rank-number';
        rank.textContent = index + 1;

        const text = document.createElement('span');
        text.className = 'item-text';
        text.textContent = item;

        const handle = document.createElement('span');
        handle.className = 'drag-handle';
        handle.textContent = '☰';

        li.append(rank, text, handle);
        listEl.appendChild(li);
      });

      Sortable.create(listEl, {
        animation: 150,
        ghostClass: 'sortable-ghost',
        chosenClass: 'sortable-chosen',
        onEnd: updateRankNumbers
      });
    };

    const markAlreadySubmitted = () => {
      submitBtn.disabled = true;
      showMessage('You have already submitted your rankings for today. Come back tomorrow!', 'info');
    };

    const loadToday = async (sessionId) => {
      const res = await fetch(`/api/today?session_id=${encodeURIComponent(sessionId)}`);
      if (res.status === 404) {
        categoryEl.textContent = '—';
        submitBtn.disabled = true;
        showMessage('No quiz available for today.', 'info');
        return;
      }
      if (!res.ok) {
        throw new Error('Unable to load the quiz');
      }

      const data = await res.json();
      categoryEl.textContent = data.category;
      renderItems(data.items);
      if (data.already_submitted) {
        markAlreadySubmitted();
      }
    };

    const submitRankings = async () => {
      const rankings = Array.from(listEl.querySelectorAll('.sortable-item'))
        .map((item) => item.dataset.item);

      loadingEl.classList.remove('hidden');
      submitBtn.disabled = true;

      try {
        const res = await fetch('/api/submit', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            session_id: localStorage.getItem(SESSION_KEY),
            rankings
          })
        });

        if (res.status === 409) {
          markAlreadySubmitted();
          return;
        }
        if (!res.ok) {
          throw new Error(await res.text() || 'Request failed');
        }

        showMessage('Thank you! Your rankings have been submitted successfully.', 'success');
      } catch (err) {
        console.error('Submission error:', err);
        showMessage('Error submitting rankings. Please try again.', 'error');
        submitBtn.disabled = false;
      } finally {
        loadingEl.classList.add('hidden');
      }
    };

    submitBtn.addEventListener('click', submitRankings);

    ensureSession()
      .then(loadToday)
      .catch((err) => showMessage(err.message, 'error'));
  </script>
</body>
</html>
"#;
